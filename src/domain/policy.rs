//! Version increment policy.
//!
//! A change passes when the current version is strictly greater than the baseline
//! and differs from it by exactly one step:
//! - patch: `1.0.0 -> 1.0.1`
//! - minor: `1.0.3 -> 1.1.0` (micro reset to zero)
//! - major: `1.5.3 -> 2.0.0` (minor and micro reset to zero)

use crate::domain::version::SemanticVersion;
use crate::error::{PolicyError, Result};
use std::fmt;

/// Kind of single-step increment between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Increment::Patch => "patch",
            Increment::Minor => "minor",
            Increment::Major => "major",
        };
        write!(f, "{}", name)
    }
}

/// Returns `true` when `current` is strictly greater than `baseline`,
/// comparing `(major, minor, micro)` in that priority order.
pub fn is_greater(current: &SemanticVersion, baseline: &SemanticVersion) -> bool {
    current.triple() > baseline.triple()
}

fn is_next(current: u64, baseline: u64) -> bool {
    baseline.checked_add(1) == Some(current)
}

/// Classifies the step from `baseline` to `current`.
///
/// Rules are checked in order and the first match wins:
/// 1. **Patch**: same major and minor, micro + 1
/// 2. **Minor**: same major, minor + 1, micro is 0
/// 3. **Major**: major + 1, minor and micro are 0
///
/// # Returns
/// * `Some(Increment)` - The step is exactly one well-formed increment
/// * `None` - Any decrease, skipped number, multi-field bump or missing reset
pub fn classify_increment(
    current: &SemanticVersion,
    baseline: &SemanticVersion,
) -> Option<Increment> {
    if current.major == baseline.major
        && current.minor == baseline.minor
        && is_next(current.micro, baseline.micro)
    {
        return Some(Increment::Patch);
    }

    if current.major == baseline.major
        && is_next(current.minor, baseline.minor)
        && current.micro == 0
    {
        return Some(Increment::Minor);
    }

    if is_next(current.major, baseline.major) && current.minor == 0 && current.micro == 0 {
        return Some(Increment::Major);
    }

    None
}

/// Returns `true` when `current` is exactly one step ahead of `baseline`.
pub fn is_consecutive_increment(current: &SemanticVersion, baseline: &SemanticVersion) -> bool {
    classify_increment(current, baseline).is_some()
}

/// Applies the full gate: the version must increase, and by exactly one step.
///
/// `branch` only names the baseline in the rejection message.
pub fn evaluate(
    current: &SemanticVersion,
    baseline: &SemanticVersion,
    branch: &str,
) -> Result<Increment> {
    if !is_greater(current, baseline) {
        return Err(PolicyError::NotUpdated {
            current: current.to_string(),
            baseline: baseline.to_string(),
            branch: branch.to_string(),
        }
        .into());
    }

    classify_increment(current, baseline).ok_or_else(|| {
        PolicyError::NotConsecutive {
            current: current.to_string(),
            baseline: baseline.to_string(),
        }
        .into()
    })
}
