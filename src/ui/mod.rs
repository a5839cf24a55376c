//! User interface module - terminal reporting.
//!
//! The gate runs unattended in CI, so there are no prompts; every function here
//! only prints.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    branch_title, display_boundary_warning, display_error, display_export, display_increment,
    display_status, display_success, display_versions,
};

use crate::error::PolicyError;

/// Prints how to resolve a policy failure.
pub fn display_policy_hint(policy: &PolicyError) {
    display_status(&policy_hint(policy));
}

fn policy_hint(policy: &PolicyError) -> String {
    match policy {
        PolicyError::NotUpdated { branch, .. } => format!(
            "Please increment the version before merging into '{}'.",
            branch
        ),
        PolicyError::NotConsecutive { .. } => {
            "Bump exactly one of patch, minor (micro reset to 0) or major (minor and micro reset to 0)."
                .to_string()
        }
    }
}
