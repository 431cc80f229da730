use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Result of the one-time startup probe for a browser executable.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub path: PathBuf,
    /// Set when no candidate existed and `path` is a best-guess default.
    pub warning: Option<String>,
}

/// Locate a browser executable. A configured custom path wins when it
/// exists; otherwise the platform candidate list is probed in order. When
/// nothing exists we still return a best-guess path so later launch attempts
/// fail with a clear OS-level error instead of an empty command.
pub fn discover(custom: Option<PathBuf>) -> Discovery {
    if let Some(path) = custom {
        if path.exists() {
            return Discovery { path, warning: None };
        }
        warn!(path = %path.display(), "configured browser_path does not exist; probing defaults");
    }

    for candidate in candidate_paths() {
        if candidate.exists() {
            debug!(path = %candidate.display(), "found browser executable");
            return Discovery {
                path: candidate,
                warning: None,
            };
        }
    }

    let fallback = fallback_path();
    Discovery {
        path: fallback,
        warning: Some(
            "Could not find Chrome or Chromium browser. Set browser_path in the config to specify it manually".to_string(),
        ),
    }
}

#[cfg(target_os = "macos")]
fn candidate_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
    ]
}

#[cfg(target_os = "linux")]
fn candidate_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/bin/chromium"),
        PathBuf::from("/usr/bin/chromium-browser"),
        PathBuf::from("/usr/bin/google-chrome"),
        PathBuf::from("/usr/bin/google-chrome-stable"),
        PathBuf::from("/snap/bin/chromium"),
    ]
}

#[cfg(windows)]
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let roots = ["ProgramFiles", "ProgramFiles(x86)", "LocalAppData"];
    for root in roots {
        if let Ok(base) = std::env::var(root) {
            paths.push(
                PathBuf::from(&base)
                    .join("Chromium")
                    .join("Application")
                    .join("chrome.exe"),
            );
            paths.push(
                PathBuf::from(&base)
                    .join("Google")
                    .join("Chrome")
                    .join("Application")
                    .join("chrome.exe"),
            );
        }
    }
    paths
}

#[cfg(not(any(target_os = "macos", target_os = "linux", windows)))]
fn candidate_paths() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(windows)]
fn fallback_path() -> PathBuf {
    let base = std::env::var("ProgramFiles").unwrap_or_else(|_| r"C:\Program Files".to_string());
    PathBuf::from(base)
        .join("Google")
        .join("Chrome")
        .join("Application")
        .join("chrome.exe")
}

#[cfg(not(windows))]
fn fallback_path() -> PathBuf {
    PathBuf::from("/usr/bin/google-chrome")
}

type Strategy = fn(&Path, &[String]) -> io::Result<()>;

/// Ordered platform spawn strategies, tried in turn until one starts.
/// "Starts" means the spawn call succeeded; the child's later exit status is
/// never inspected.
fn strategies() -> &'static [Strategy] {
    #[cfg(target_os = "macos")]
    {
        &[spawn_direct, spawn_via_script, spawn_via_open]
    }
    #[cfg(target_os = "linux")]
    {
        &[spawn_direct, spawn_via_nohup, spawn_via_desktop_entry]
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        &[spawn_direct]
    }
}

/// Launch the browser detached, falling back through the platform's
/// alternate spawn mechanisms. Returns the last underlying error when every
/// attempt fails to start.
pub fn launch(exe: &Path, args: &[String]) -> Result<()> {
    let mut last_err: Option<io::Error> = None;
    for strategy in strategies() {
        match strategy(exe, args) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!(error = %e, "launch attempt failed, trying next mechanism");
                last_err = Some(e);
            }
        }
    }
    Err(Error::Launch(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::Unsupported, "no launch mechanism for this platform")
    })))
}

fn spawn_direct(exe: &Path, args: &[String]) -> io::Result<()> {
    Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_via_script(exe: &Path, args: &[String]) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let script = std::env::temp_dir().join("bx_launch.sh");
    // Args are joined with plain spaces; values containing spaces are not
    // representable in the flags format anyway.
    let content = format!("#!/bin/bash\n{} {} &\n", exe.display(), args.join(" "));
    std::fs::write(&script, content)?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Command::new("/bin/bash")
        .arg(&script)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_via_open(exe: &Path, args: &[String]) -> io::Result<()> {
    Command::new("open")
        .arg(exe)
        .arg("--args")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "linux")]
fn spawn_via_nohup(exe: &Path, args: &[String]) -> io::Result<()> {
    Command::new("nohup")
        .arg(exe)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "linux")]
fn spawn_via_desktop_entry(exe: &Path, args: &[String]) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let entry = std::env::temp_dir().join("bx_chrome.desktop");
    let content = format!(
        "[Desktop Entry]\nType=Application\nName=bx Chrome\nExec={} {}\nTerminal=false",
        exe.display(),
        args.join(" ")
    );
    std::fs::write(&entry, content)?;
    std::fs::set_permissions(&entry, std::fs::Permissions::from_mode(0o755))?;
    Command::new("xdg-open")
        .arg(&entry)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_always_yields_a_path() {
        let d = discover(None);
        assert!(!d.path.as_os_str().is_empty());
        // Either a real candidate was found or the best-guess default plus a
        // warning was recorded.
        if !d.path.exists() {
            assert!(d.warning.is_some());
        }
    }

    #[test]
    fn discover_prefers_existing_custom_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let d = discover(Some(file.path().to_path_buf()));
        assert_eq!(d.path, file.path());
        assert!(d.warning.is_none());
    }

    #[test]
    fn discover_ignores_missing_custom_path() {
        let d = discover(Some(PathBuf::from("/nonexistent/bx-browser")));
        assert_ne!(d.path, PathBuf::from("/nonexistent/bx-browser"));
    }
}
