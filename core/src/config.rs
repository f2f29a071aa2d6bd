//! Configuration models and loaders for the dispatcher.

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name probed in the invocation directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gotask.toml";

/// Runtime configuration for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the Go module, relative to the invocation location.
    pub backend_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_dir: PathBuf::from("./backend"),
        }
    }
}

/// Load configuration from the provided path.
///
/// Expected TOML keys:
/// - `backend_dir` as a path string
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let content = fs::read_to_string(path.as_ref())?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve configuration for one invocation.
///
/// An explicitly requested file must load. Otherwise `gotask.toml` is picked
/// up when it exists next to the invocation, and built-in defaults apply when
/// it does not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                load_config(fallback)
            } else {
                Ok(Config::default())
            }
        }
    }
}
