//! Domain logic - pure version rules independent of files and git

pub mod policy;
pub mod version;

pub use policy::{classify_increment, evaluate, is_consecutive_increment, is_greater, Increment};
pub use version::SemanticVersion;
