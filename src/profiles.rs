use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};

/// Flags seeded into brand-new profiles and into the edit buffer defaults.
pub const DEFAULT_FLAGS: &str = "--no-first-run --disable-features=RendererCodeIntegrity";

/// Extended suppression set used by the seeded `clean` profile.
pub const CLEAN_FLAGS: &str = "--no-first-run --disable-features=RendererCodeIntegrity,UseChromeOSDirectVideoDecoder --disable-gpu-driver-bug-workarounds --ignore-gpu-blacklist --disable-gpu-compositing --disable-infobars";

/// Sentinel proxy value meaning "no proxy configured".
pub const NO_PROXY: &str = "none";

const STORE_FILE: &str = "profiles.conf";

/// A named browser launch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// `"none"` or `host:port`.
    pub proxy: String,
    /// Free-form; `none`, `http`, or `socks5` by convention (not validated).
    pub proxy_type: String,
    /// Space-separated browser command-line flags.
    pub flags: String,
}

impl Profile {
    /// Parse one `name|proxy|proxyType|flags` store line. Lines with fewer
    /// than four fields are dropped; extra `|` segments are discarded, which
    /// mirrors the store format's no-escaping limitation.
    fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split('|');
        let name = parts.next()?;
        let proxy = parts.next()?;
        let proxy_type = parts.next()?;
        let flags = parts.next()?;
        Some(Self {
            name: name.to_string(),
            proxy: proxy.to_string(),
            proxy_type: proxy_type.to_string(),
            flags: flags.to_string(),
        })
    }

    fn to_line(&self) -> String {
        format!("{}|{}|{}|{}", self.name, self.proxy, self.proxy_type, self.flags)
    }
}

fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            name: "default".to_string(),
            proxy: NO_PROXY.to_string(),
            proxy_type: NO_PROXY.to_string(),
            flags: DEFAULT_FLAGS.to_string(),
        },
        Profile {
            name: "clean".to_string(),
            proxy: NO_PROXY.to_string(),
            proxy_type: NO_PROXY.to_string(),
            flags: CLEAN_FLAGS.to_string(),
        },
    ]
}

/// In-memory profile map backed by a flat `profiles.conf` file. Every
/// mutation rewrites the whole file; there is no locking, so a second
/// instance racing on the same file is last-writer-wins.
#[derive(Debug)]
pub struct ProfileStore {
    root: PathBuf,
    store_file: PathBuf,
    profiles: HashMap<String, Profile>,
}

impl ProfileStore {
    /// Open (or create) the store rooted at `root`. On first run the two
    /// seed profiles are written before loading. An unreadable store file is
    /// treated as empty rather than fatal.
    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        let store_file = root.join(STORE_FILE);
        let mut store = Self {
            root,
            store_file,
            profiles: HashMap::new(),
        };
        if !store.store_file.exists() {
            for p in seed_profiles() {
                store.profiles.insert(p.name.clone(), p);
            }
            store.save()?;
        }
        store.load();
        Ok(store)
    }

    fn load(&mut self) {
        self.profiles.clear();
        let data = match fs::read_to_string(&self.store_file) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.store_file.display(), error = %e, "cannot read profile store");
                return;
            }
        };
        for line in data.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(profile) = Profile::parse_line(line) {
                self.profiles.insert(profile.name.clone(), profile);
            }
        }
    }

    /// Rewrite the backing file from the in-memory map. Iteration order is
    /// unspecified and not stable across runs.
    pub fn save(&self) -> Result<()> {
        let mut content = String::new();
        for profile in self.profiles.values() {
            content.push_str(&profile.to_line());
            content.push('\n');
        }
        fs::write(&self.store_file, content)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile names sorted for stable display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Insert or replace a profile and persist.
    pub fn upsert(&mut self, profile: Profile) -> Result<()> {
        self.profiles.insert(profile.name.clone(), profile);
        self.save()
    }

    /// Remove a profile and persist. The on-disk working directory is left
    /// in place intentionally; `clean_work_dir` handles its contents.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let existed = self.profiles.remove(name).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    /// Commit an add/edit. Validates before touching the map: an empty name
    /// or a rename colliding with a different existing profile leaves the
    /// store untouched. A rename removes the old key and inserts the new one.
    pub fn apply_edit(&mut self, original_name: Option<&str>, profile: Profile) -> Result<()> {
        if profile.name.is_empty() {
            return Err(Error::EmptyName);
        }
        let renamed = original_name != Some(profile.name.as_str());
        if renamed && self.profiles.contains_key(&profile.name) {
            return Err(Error::DuplicateName(profile.name));
        }
        if let Some(old) = original_name {
            if renamed {
                self.profiles.remove(old);
            }
        }
        self.profiles.insert(profile.name.clone(), profile);
        self.save()
    }

    /// Per-profile browser working directory (`--user-data-dir` target).
    pub fn work_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Remove every entry inside `dir`, leaving the directory itself in place.
/// Stops at the first removal failure. Returns the number of entries removed.
pub fn clean_work_dir(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Err(Error::WorkDirMissing);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Default store root under the user's home directory.
pub fn default_root() -> Option<PathBuf> {
    let home = crate::config::home_dir()?;
    #[cfg(windows)]
    {
        Some(home.join("AppData").join("Local").join("bx").join("profiles"))
    }
    #[cfg(not(windows))]
    {
        Some(home.join(".bx").join("profiles"))
    }
}
