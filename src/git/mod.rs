//! Access to file content on a git reference
//!
//! The baseline version lives in a file on another branch, usually the merge
//! target. The [ReferenceFetcher] trait reads that content so the policy check
//! never depends on a concrete git backend.
//!
//! - [repository::Git2Fetcher]: real implementation using the `git2` crate
//! - [mock::MockFetcher]: in-memory implementation for tests
//!
//! ```rust
//! # use version_gate::git::ReferenceFetcher;
//! # use std::path::Path;
//! # fn example<F: ReferenceFetcher>(fetcher: &F) -> version_gate::Result<()> {
//! let content = fetcher.read_file_at("origin/main", Path::new("pyproject.toml"))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockFetcher;
pub use repository::Git2Fetcher;

use crate::error::Result;
use std::path::Path;

/// Builds the remote-tracking reference name for a branch (`origin/main`).
pub fn remote_reference(remote: &str, branch: &str) -> String {
    format!("{}/{}", remote, branch)
}

/// Reads file content at a git reference
///
/// ## Error Handling
///
/// Implementations report unreadable references and missing files as
/// [crate::error::VersionGateError::Fetch] so the caller can treat them as a
/// blocked run.
pub trait ReferenceFetcher {
    /// Update the remote-tracking branch `<remote>/<branch>` from the remote.
    ///
    /// # Returns
    /// * `Ok(())` - The remote-tracking reference is up to date
    /// * `Err` - If the remote is missing or the network operation fails
    fn fetch_remote(&self, remote: &str, branch: &str) -> Result<()>;

    /// Read the text content of `path` as it exists at `reference`.
    ///
    /// `reference` is anything git can resolve to a commit, typically
    /// `origin/main`.
    ///
    /// # Returns
    /// * `Ok(String)` - UTF-8 file content
    /// * `Err` - If the reference or file cannot be resolved
    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String>;
}
