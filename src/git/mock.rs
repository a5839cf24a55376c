use crate::error::{Result, VersionGateError};
use crate::git::ReferenceFetcher;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Mock fetcher for testing without a git repository
pub struct MockFetcher {
    files: HashMap<(String, String), String>,
    fetch_error: Option<String>,
    fetched: RefCell<Vec<String>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher
    pub fn new() -> Self {
        MockFetcher {
            files: HashMap::new(),
            fetch_error: None,
            fetched: RefCell::new(Vec::new()),
        }
    }

    /// Add file content visible at a reference
    pub fn add_file(
        &mut self,
        reference: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.files
            .insert((reference.into(), path.into()), content.into());
    }

    /// Make every `fetch_remote` call fail with `message`
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// References passed to `fetch_remote`, as `remote/branch`
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceFetcher for MockFetcher {
    fn fetch_remote(&self, remote: &str, branch: &str) -> Result<()> {
        self.fetched
            .borrow_mut()
            .push(super::remote_reference(remote, branch));

        match &self.fetch_error {
            Some(message) => Err(VersionGateError::fetch(message.clone())),
            None => Ok(()),
        }
    }

    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String> {
        let key = (reference.to_string(), path.to_string_lossy().into_owned());
        self.files.get(&key).cloned().ok_or_else(|| {
            VersionGateError::fetch(format!(
                "Could not fetch {} from {}",
                path.display(),
                reference
            ))
        })
    }
}
