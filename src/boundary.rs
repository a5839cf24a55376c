use std::fmt;

/// Non-fatal conditions met while resolving versions.
/// These are reported to the user but do not block the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Updating the remote-tracking branch failed; the local copy of it is used
    FetchFailed {
        remote: String,
        branch: String,
        reason: String,
    },
    /// Pre-release or build text that the comparison does not look at
    MetadataIgnored { version: String, metadata: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FetchFailed {
                remote,
                branch,
                reason,
            } => {
                write!(
                    f,
                    "Could not fetch '{}' from remote '{}' ({}); using the local {}/{}",
                    branch, remote, reason, remote, branch
                )
            }
            BoundaryWarning::MetadataIgnored { version, metadata } => {
                write!(
                    f,
                    "Version '{}' carries '{}', which is ignored when comparing",
                    version, metadata
                )
            }
        }
    }
}
