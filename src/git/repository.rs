use crate::error::{Result, VersionGateError};
use git2::Repository as Git2Repo;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Reads baseline files through libgit2
pub struct Git2Fetcher {
    repo: Git2Repo,
}

impl Git2Fetcher {
    /// Open the repository that contains `start`
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let repo = Git2Repo::discover(start.as_ref()).map_err(|e| {
            VersionGateError::fetch(format!(
                "Not in a git repository ({}): {}",
                start.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Fetcher { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Fetcher { repo }
    }

    /// Converts `path` into a path relative to the repository root.
    ///
    /// Relative paths are resolved against the current directory first, so running
    /// from a subdirectory reads the same file `git show` would from that directory
    /// with a `./` prefix. Paths outside the work tree are used as given.
    fn repo_relative(&self, path: &Path) -> Result<PathBuf> {
        let workdir = match self.repo.workdir() {
            Some(dir) => dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()),
            None => return Ok(path.to_path_buf()),
        };

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        let absolute = absolute
            .canonicalize()
            .unwrap_or_else(|_| normalize(&absolute));

        match absolute.strip_prefix(&workdir) {
            Ok(relative) => Ok(relative.to_path_buf()),
            Err(_) => Ok(path.to_path_buf()),
        }
    }
}

/// Lexically resolves `.` and `..` for paths that do not exist on disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl super::ReferenceFetcher for Git2Fetcher {
    fn fetch_remote(&self, remote: &str, branch: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| VersionGateError::fetch(format!("Remote '{}' not found: {}", remote, e)))?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let key_path = home.join(".ssh").join(key);
                        if key_path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &key_path, None)
                            {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let refspec = format!("+refs/heads/{}:refs/remotes/{}/{}", branch, remote, branch);
        debug!(%refspec, "fetching baseline branch");

        remote_handle
            .fetch(&[refspec.as_str()], Some(&mut fetch_options), None)
            .map_err(|e| {
                VersionGateError::fetch(format!(
                    "Failed to fetch '{}' from remote '{}': {}",
                    branch,
                    remote,
                    e.message()
                ))
            })?;

        Ok(())
    }

    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String> {
        let tree = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_tree())
            .map_err(|e| {
                VersionGateError::fetch(format!(
                    "Cannot resolve reference '{}': {}",
                    reference,
                    e.message()
                ))
            })?;

        let relative = self.repo_relative(path)?;
        debug!(reference, path = %relative.display(), "reading file at reference");

        let entry = tree.get_path(&relative).map_err(|_| {
            VersionGateError::fetch(format!(
                "Could not fetch {} from {}",
                relative.display(),
                reference
            ))
        })?;

        let object = entry.to_object(&self.repo)?;
        let blob = object.as_blob().ok_or_else(|| {
            VersionGateError::fetch(format!(
                "{} at {} is not a file",
                relative.display(),
                reference
            ))
        })?;

        let content = std::str::from_utf8(blob.content()).map_err(|_| {
            VersionGateError::fetch(format!(
                "{} at {} is not valid UTF-8",
                relative.display(),
                reference
            ))
        })?;

        Ok(content.to_string())
    }
}
