use crate::error::{Result, VersionGateError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Release-segment form accepted when a value is not strict SemVer: an optional `v`,
/// one to three numeric fields and optional trailing metadata such as `rc1` or `.post2`.
const RELEASE_PATTERN: &str = r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?([.\-+_]?[A-Za-z].*)?$";

fn release_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(RELEASE_PATTERN).expect("release pattern is a valid regex"))
}

/// Semantic version as read from a project file.
///
/// Only the `(major, minor, micro)` triple takes part in equality and ordering.
/// Pre-release or build text is kept in `metadata` for display.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub metadata: Option<String>,
}

impl SemanticVersion {
    /// Create a new version without metadata
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            micro,
            metadata: None,
        }
    }

    /// Parse a version string such as `1.2.3`, `v1.2`, `2.0.0-rc.1` or `1.4.0rc1`.
    ///
    /// Strict SemVer is tried first; otherwise the release-segment form is used and
    /// missing trailing fields default to zero (`1.2` is `1.2.0`).
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - Parsed version
    /// * `Err(VersionGateError::Version)` - Empty input, more than three numeric fields,
    ///   or text that does not start with a number
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Err(VersionGateError::version("Empty version string"));
        }

        if let Ok(strict) = semver::Version::parse(text) {
            let mut metadata = String::new();
            if !strict.pre.is_empty() {
                metadata.push('-');
                metadata.push_str(strict.pre.as_str());
            }
            if !strict.build.is_empty() {
                metadata.push('+');
                metadata.push_str(strict.build.as_str());
            }

            return Ok(SemanticVersion {
                major: strict.major,
                minor: strict.minor,
                micro: strict.patch,
                metadata: (!metadata.is_empty()).then_some(metadata),
            });
        }

        let caps = release_pattern().captures(text).ok_or_else(|| {
            VersionGateError::version(format!(
                "Invalid version format: '{}' - expected MAJOR[.MINOR[.MICRO]]",
                text
            ))
        })?;

        let field = |index: usize, name: &str| -> Result<u64> {
            match caps.get(index) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| {
                    VersionGateError::version(format!("Invalid {} version: {}", name, m.as_str()))
                }),
                None => Ok(0),
            }
        };

        Ok(SemanticVersion {
            major: field(1, "major")?,
            minor: field(2, "minor")?,
            micro: field(3, "micro")?,
            metadata: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    /// The comparable part of the version.
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.micro)
    }

    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionGateError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(metadata) = &self.metadata {
            write!(f, "{}", metadata)?;
        }
        Ok(())
    }
}
