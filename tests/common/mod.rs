//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A throwaway git repository with real commits, merges, and tags.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// Sets a local committer identity so the system `git` binary can create
    /// tag objects without global configuration.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
        }

        Self { dir, repo }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Stage a file and return the resulting tree OID.
    fn stage_file(&self, name: &str, content: &str) -> Oid {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        index.write_tree().expect("Failed to write tree")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        let tree_id = self.stage_file("test.txt", &content);
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a two-parent merge commit on HEAD with the subject git writes
    /// when merging `branch_name`. Returns the merge commit OID.
    pub fn merge_commit(&self, branch_name: &str) -> Oid {
        let sig = self.signature();
        let base = self
            .repo
            .head()
            .expect("Failed to get HEAD")
            .peel_to_commit()
            .expect("Failed to peel HEAD");

        let side_tree_id = self.stage_file("side.txt", branch_name);
        let side_tree = self
            .repo
            .find_tree(side_tree_id)
            .expect("Failed to find side tree");
        let side_oid = self
            .repo
            .commit(
                None,
                &sig,
                &sig,
                &format!("Work on {}", branch_name),
                &side_tree,
                &[&base],
            )
            .expect("Failed to create side commit");
        let side = self
            .repo
            .find_commit(side_oid)
            .expect("Failed to find side commit");

        let merge_tree_id = self.stage_file("side.txt", &format!("{} merged", branch_name));
        let merge_tree = self
            .repo
            .find_tree(merge_tree_id)
            .expect("Failed to find merge tree");

        self.repo
            .commit(
                Some("HEAD"),
                &sig,
                &sig,
                &format!("Merge branch '{}'", branch_name),
                &merge_tree,
                &[&base, &side],
            )
            .expect("Failed to create merge commit")
    }

    /// Create an annotated tag pointing to the given OID.
    pub fn tag_annotated(&self, name: &str, oid: Oid, message: &str) {
        let sig = self.signature();
        let obj = self
            .repo
            .find_object(oid, None)
            .expect("Failed to find object");
        self.repo
            .tag(name, &obj, &sig, message, false)
            .expect("Failed to create annotated tag");
    }

    /// Create a bare repository and register it as this repo's `origin`.
    /// Returns the bare repository's directory.
    pub fn add_bare_origin(&self) -> tempfile::TempDir {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        self.repo
            .remote("origin", remote_dir.path().to_str().expect("non-utf8 path"))
            .expect("Failed to add origin remote");
        remote_dir
    }
}
