use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Optional user configuration, read from `~/.bx/config.toml`. Anything
/// missing or unparseable falls back to defaults; the config is never
/// required.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Explicit browser executable, checked before the discovery probe.
    #[serde(default)]
    pub browser_path: Option<String>,
    /// "dark" (default) or "light".
    #[serde(default)]
    pub theme: Option<String>,
}

pub fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";
    std::env::var(var).ok().map(PathBuf::from)
}

pub fn config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".bx").join("config.toml"))
}

pub fn load_app_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    let Ok(s) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match toml::from_str::<AppConfig>(&s) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid config file; using defaults");
            AppConfig::default()
        }
    }
}
