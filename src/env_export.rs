//! Exports values to later CI steps through the `GITHUB_ENV` file.

use crate::error::{Result, VersionGateError};
use regex::Regex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

/// Environment variable naming the file that CI steps append exports to.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("variable name pattern is a valid regex")
    })
}

/// Appends `KEY=value` lines to an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvExporter {
    target: PathBuf,
}

impl EnvExporter {
    /// Target the file named by `$GITHUB_ENV`.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(GITHUB_ENV) {
            Some(path) if !path.is_empty() => Ok(EnvExporter {
                target: PathBuf::from(path),
            }),
            _ => Err(VersionGateError::env(format!(
                "{} is not set; run inside a CI job or pass --env-file",
                GITHUB_ENV
            ))),
        }
    }

    /// Target an explicit file.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        EnvExporter {
            target: path.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Appends `key=value` as one line, creating the file if needed.
    ///
    /// # Returns
    /// * `Ok(())` - The line was written
    /// * `Err(VersionGateError::Env)` - Invalid key, multi-line value, or unwritable file
    pub fn export(&self, key: &str, value: &str) -> Result<()> {
        if !key_pattern().is_match(key) {
            return Err(VersionGateError::env(format!(
                "Invalid variable name '{}'",
                key
            )));
        }

        if value.contains('\n') || value.contains('\r') {
            return Err(VersionGateError::env(format!(
                "Value for {} spans multiple lines",
                key
            )));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.target)
            .map_err(|e| {
                VersionGateError::env(format!(
                    "Cannot open {}: {}",
                    self.target.display(),
                    e
                ))
            })?;

        writeln!(file, "{}={}", key, value)?;
        info!(key, value, target = %self.target.display(), "exported variable");

        Ok(())
    }
}
