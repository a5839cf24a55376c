#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::Path;

pub fn pyproject(version: &str) -> String {
    format!(
        "[project]\nname = \"demo\"\nversion = \"{}\"\n\n[tool.poetry]\nversion = \"{}\"\n",
        version, version
    )
}

/// Creates a repository with `files` committed on HEAD and points
/// `refs/remotes/origin/main` at that commit, as if it had been fetched.
pub fn init_repo(dir: &Path, files: &[(&str, String)]) -> Repository {
    let repo = Repository::init(dir).unwrap();

    {
        let mut index = repo.index().unwrap();
        for (name, content) in files {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
            index.add_path(Path::new(name)).unwrap();
        }
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        repo.reference("refs/remotes/origin/main", oid, true, "baseline")
            .unwrap();
    }

    repo
}
