//! Configuration
//!
//! Default detection options read from `~/.cumas/config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cumas_detect::DetectOptions;
use tracing::debug;

/// Environment variable naming an alternative options file
pub const CONFIG_ENV: &str = "CUMAS_CONFIG";

/// Get the cumas base directory (`~/.cumas/`)
pub fn cumas_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cumas"))
}

/// Default options file location
pub fn default_config_path() -> Option<PathBuf> {
    cumas_dir().map(|dir| dir.join("config.json"))
}

/// Resolve and load the options file.
///
/// An explicitly named file (flag or env var) must exist; the default
/// location is optional.
pub fn load_options(explicit: Option<&Path>) -> anyhow::Result<DetectOptions> {
    if let Some(path) = explicit {
        return read_options(path);
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return read_options(Path::new(&path));
    }

    match default_config_path() {
        Some(path) if path.exists() => read_options(&path),
        _ => Ok(DetectOptions::default()),
    }
}

fn read_options(path: &Path) -> anyhow::Result<DetectOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let options: DetectOptions = serde_json::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!("Loaded options from {:?}: {:?}", path, options);
    Ok(options)
}
