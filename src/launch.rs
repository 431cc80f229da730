use std::fs;
use std::path::Path;

use serde_json::json;

use crate::browser;
use crate::error::{Error, Result};
use crate::profiles::{Profile, ProfileStore, NO_PROXY};

/// Opened so a window is guaranteed to appear even with no other arguments.
const BLANK_PAGE: &str = "about:blank";

// Fixed tail appended after the profile's own flags. The target parses
// duplicates last-wins, so profile flags cannot override these. Versioned
// data, not derived logic; keep in sync with the target browser's flag set.
const SUPPRESSION_TAIL: &[&str] = &[
    // Logging and notification suppression
    "--disable-logging",
    "--disable-breakpad",
    "--disable-infobars",
    "--disable-notifications",
    "--no-default-browser-check",
    "--silent-launch",
    // GPU artifact suppression
    "--disable-gpu",
    "--disable-gpu-compositing",
    "--disable-gpu-sandbox",
    "--disable-gpu-driver-bug-workarounds",
    "--disable-features=UseChromeOSDirectVideoDecoder",
    "--disable-accelerated-2d-canvas",
    "--disable-accelerated-video-decode",
    "--disable-accelerated-video-encode",
    "--disable-webgl",
    "--disable-threaded-animation",
    "--disable-webgl-image-chromium",
    "--force-dark-mode",
];

#[cfg(not(windows))]
const PLATFORM_TAIL: &[&str] = &["--ignore-certificate-errors"];
#[cfg(windows)]
const PLATFORM_TAIL: &[&str] = &[];

/// Build the full ordered argument list for launching `profile` with
/// `work_dir` as its user-data directory. Order matters: later flags win
/// when the target sees duplicates.
pub fn build_args(profile: &Profile, work_dir: &Path) -> Vec<String> {
    let mut args = Vec::new();
    args.push(format!("--user-data-dir={}", work_dir.display()));
    args.push("--new-window".to_string());
    args.push(BLANK_PAGE.to_string());

    if profile.proxy != NO_PROXY {
        // Only http proxies get a scheme prefix; socks5 addresses are passed
        // bare, which is what the target expects. Do not "fix" this.
        let prefix = if profile.proxy_type == "http" { "http://" } else { "" };
        args.push(format!("--proxy-server={}{}", prefix, profile.proxy));
    }

    // Single-space split, empty tokens dropped. A flag value containing a
    // space cannot be represented; there is no shell quoting here.
    for flag in profile.flags.split(' ') {
        if !flag.is_empty() {
            args.push(flag.to_string());
        }
    }

    for flag in SUPPRESSION_TAIL.iter().chain(PLATFORM_TAIL) {
        args.push((*flag).to_string());
    }
    args
}

/// Write the one-time `Local State` seed file into `work_dir` if absent.
/// The blob pre-empts the first-run bubble and the API-key warning in the
/// launched process.
pub fn ensure_seed_state(work_dir: &Path) -> std::io::Result<()> {
    let path = work_dir.join("Local State");
    if path.exists() {
        return Ok(());
    }
    let blob = json!({
        "browser": {
            "enabled_labs_experiments": ["ignore-gpu-blocklist@1"]
        },
        "distribution": {
            "suppress_first_run_bubble": true,
            "suppress_api_keys_warning": true
        }
    });
    fs::write(path, blob.to_string())
}

/// Full launch flow for a named profile: create the working directory, seed
/// its local state, build arguments, and fire the platform launch chain.
/// The spawned process is not waited on.
pub fn launch_profile(store: &ProfileStore, exe: &Path, name: &str) -> Result<String> {
    let profile = store
        .get(name)
        .ok_or_else(|| Error::UnknownProfile(name.to_string()))?;
    let work_dir = store.work_dir(name);
    fs::create_dir_all(&work_dir)?;
    ensure_seed_state(&work_dir)?;
    let args = build_args(profile, &work_dir);
    browser::launch(exe, &args)?;
    Ok(format!("Launched with profile: {}", profile.name))
}
