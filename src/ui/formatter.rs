//! Pure formatting functions for terminal output.
//!
//! Styling goes through `console`, which drops colors when the output is not
//! a terminal (CI logs, pipes).

use crate::boundary::BoundaryWarning;
use crate::domain::Increment;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Capitalizes each `-`/`_`/`/` separated word of a branch name for headings,
/// e.g. `main` -> `Main`, `release/2.x` -> `Release/2.x`.
pub fn branch_title(branch: &str) -> String {
    let mut title = String::with_capacity(branch.len());
    let mut capitalize = true;

    for ch in branch.chars() {
        if capitalize {
            title.extend(ch.to_uppercase());
        } else {
            title.push(ch);
        }
        capitalize = matches!(ch, '-' | '_' | '/');
    }

    title
}

/// Display the two versions being compared.
///
/// # Arguments
/// * `current` - Version from the working copy
/// * `baseline` - Version from the comparison branch
/// * `branch` - Name of the comparison branch
pub fn display_versions(current: &str, baseline: &str, branch: &str) {
    display_status(&format!(
        "Current branch version: {}",
        style(current).cyan()
    ));
    display_status(&format!(
        "{} branch version: {}",
        branch_title(branch),
        style(baseline).cyan()
    ));
}

/// Display the accepted increment.
pub fn display_increment(increment: Increment, baseline: &str, current: &str) {
    display_success(&format!(
        "Versions are consecutive ({} bump {} -> {})",
        increment, baseline, current
    ));
}

/// Display an exported variable.
pub fn display_export(key: &str, value: &str, target: &str) {
    display_success(&format!(
        "Exported {}={} to {}",
        style(key).bold(),
        value,
        target
    ));
}
