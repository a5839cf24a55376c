use crate::error::{Result, VersionGateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "versiongate.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".versiongate.toml";

fn default_branch() -> String {
    "main".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_file() -> String {
    "pyproject.toml".to_string()
}

fn default_path() -> String {
    "project/version".to_string()
}

fn default_env_key() -> String {
    "VERSION".to_string()
}

/// Defaults for command-line options.
///
/// Any key left out of the file keeps its built-in default, so an empty file is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch holding the baseline version
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Remote whose tracking branch is read
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Project file containing the version
    #[serde(default = "default_file")]
    pub file: String,

    /// Slash-delimited key path to the version inside `file`
    #[serde(default = "default_path")]
    pub path: String,

    /// Variable name used when exporting the version
    #[serde(default = "default_env_key")]
    pub env_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch: default_branch(),
            remote: default_remote(),
            file: default_file(),
            path: default_path(),
            env_key: default_env_key(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in current directory
/// 3. `.versiongate.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        VersionGateError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        VersionGateError::config(format!("Invalid {}: {}", path.display(), e.message()))
    })
}
