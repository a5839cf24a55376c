//! Project metadata documents.
//!
//! Reads `.toml`, `.json` and `.yml`/`.yaml` files into a single
//! [`serde_json::Value`] tree and walks it with a slash-delimited key path
//! such as `project/version` or `tool/poetry/version`.

use crate::error::{Result, VersionGateError};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Supported document formats, chosen by file extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension (case-insensitive).
    ///
    /// # Returns
    /// * `Ok(DocumentFormat)` - For `toml`, `json`, `yml` and `yaml`
    /// * `Err(VersionGateError::UnsupportedFormat)` - Any other or missing extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(DocumentFormat::Toml),
            Some("json") => Ok(DocumentFormat::Json),
            Some("yml") | Some("yaml") => Ok(DocumentFormat::Yaml),
            _ => Err(VersionGateError::unsupported_format(
                path.display().to_string(),
            )),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Toml => "TOML",
            DocumentFormat::Json => "JSON",
            DocumentFormat::Yaml => "YAML",
        };
        write!(f, "{}", name)
    }
}

/// Parses `content` according to the format implied by `path`.
pub fn parse_document(path: &Path, content: &str) -> Result<Value> {
    let format = DocumentFormat::from_path(path)?;
    debug!(file = %path.display(), %format, "parsing document");

    let parsed = match format {
        DocumentFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| {
        VersionGateError::parse(format!("Error parsing {}: {}", path.display(), e.trim_end()))
    })
}

/// Reads and parses a document from the working copy.
pub fn load_local(path: &Path) -> Result<Value> {
    // Reject the extension before touching the filesystem.
    DocumentFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        VersionGateError::fetch(format!("Could not read {}: {}", path.display(), e))
    })?;

    parse_document(path, &content)
}

/// Slash-delimited path to a value inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPath {
    segments: Vec<String>,
}

impl VersionPath {
    /// Splits `raw` on `/`. Empty paths and empty segments (`a//b`) are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<String> = raw.split('/').map(|s| s.to_string()).collect();

        if segments.iter().any(|s| s.is_empty()) {
            return Err(VersionGateError::lookup(format!(
                "Invalid key path '{}': empty segment",
                raw
            )));
        }

        Ok(VersionPath { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks `root` along this path and returns the leaf as a string.
    ///
    /// Objects are indexed by key and arrays by numeric segment. String leaves are
    /// returned unchanged and non-negative integers use their textual form (`3`).
    /// Fractional numbers are rejected: `1.10` reads back as `1.1`. Booleans, null,
    /// objects and arrays are not versions either.
    pub fn locate(&self, root: &Value) -> Result<String> {
        let mut current = root;

        for (depth, segment) in self.segments.iter().enumerate() {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };

            current = next.ok_or_else(|| {
                VersionGateError::lookup(format!(
                    "Key '{}' not found (at '{}')",
                    segment,
                    self.segments[..=depth].join("/")
                ))
            })?;
        }

        match current {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_u64() => Ok(n.to_string()),
            Value::Number(n) => Err(VersionGateError::lookup(format!(
                "Value at '{}' is an unquoted number ({}) and may have lost digits; quote the version",
                self, n
            ))),
            other => Err(VersionGateError::lookup(format!(
                "Value at '{}' is not a version string: {}",
                self,
                other
            ))),
        }
    }
}

impl fmt::Display for VersionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
