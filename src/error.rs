use thiserror::Error;

/// Reasons the version policy rejects a change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Version has not been updated: {current} is not greater than {baseline} on '{branch}'")]
    NotUpdated {
        current: String,
        baseline: String,
        branch: String,
    },

    #[error("Only one version increase at a time allowed: {baseline} -> {current}")]
    NotConsecutive { current: String, baseline: String },
}

/// Unified error type for version-gate operations
#[derive(Error, Debug)]
pub enum VersionGateError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Policy violation: {0}")]
    Policy(#[from] PolicyError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment export error: {0}")]
    Env(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        VersionGateError::Fetch(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        VersionGateError::Parse(msg.into())
    }

    pub fn unsupported_format(path: impl Into<String>) -> Self {
        VersionGateError::UnsupportedFormat(path.into())
    }

    /// Create a lookup error with context
    pub fn lookup(msg: impl Into<String>) -> Self {
        VersionGateError::Lookup(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionGateError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }

    /// Create an environment export error with context
    pub fn env(msg: impl Into<String>) -> Self {
        VersionGateError::Env(msg.into())
    }

    /// True for the two policy outcomes, as opposed to I/O or lookup failures.
    pub fn is_policy(&self) -> bool {
        matches!(self, VersionGateError::Policy(_))
    }
}
