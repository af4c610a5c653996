//! Invocations of the system `git` binary.
//!
//! All operations use `std::process::Command` to shell out to the system
//! `git`, inheriting the user's git config, SSH agent, and credential store.
//! The trait keeps the release pipeline testable without a repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::GitError;

/// Narrow contract over the git operations the release pipeline needs.
#[cfg_attr(test, mockall::automock)]
pub trait GitCli: Send + Sync {
    /// Tag decoration lines for tagged commits, newest first
    /// (`git log --tags --simplify-by-decoration --pretty=format:%d`).
    fn decorated_tags(&self) -> Result<String, GitError>;

    /// Commit dates of release tags, newest first
    /// (`git log --tags=sprint-* --format=%ci --simplify-by-decoration`).
    fn release_tag_dates(&self) -> Result<String, GitError>;

    /// Subject lines of merge commits after the given bound
    /// (`git log --merges --format=%s --since=<bound>`).
    fn merge_subjects_since(&self, bound: &str) -> Result<String, GitError>;

    /// Create annotated tag `name` with the message read from `message_file`.
    fn create_annotated_tag(&self, name: &str, message_file: &Path) -> Result<(), GitError>;

    /// Delete a local tag. Used to roll back when the push fails.
    fn delete_tag(&self, name: &str) -> Result<(), GitError>;

    /// Push tags to the default remote.
    fn push_tags(&self) -> Result<(), GitError>;
}

/// Collaborator backed by the system `git` binary.
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Operate on the repository at `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run a git command, capturing stdout or a descriptive error.
    fn run(&self, args: &[&str], operation: &'static str) -> Result<String, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::SpawnFailed { operation, source })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                operation,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitCli for SystemGit {
    fn decorated_tags(&self) -> Result<String, GitError> {
        self.run(
            &["log", "--tags", "--simplify-by-decoration", "--pretty=format:%d"],
            "list tags",
        )
    }

    fn release_tag_dates(&self) -> Result<String, GitError> {
        self.run(
            &["log", "--tags=sprint-*", "--format=%ci", "--simplify-by-decoration"],
            "list tag dates",
        )
    }

    fn merge_subjects_since(&self, bound: &str) -> Result<String, GitError> {
        let since = format!("--since={}", bound);
        self.run(&["log", "--merges", "--format=%s", &since], "list merges")
    }

    fn create_annotated_tag(&self, name: &str, message_file: &Path) -> Result<(), GitError> {
        let file = message_file.to_string_lossy();
        self.run(&["tag", "-a", name, "-F", &file], "create tag")?;
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<(), GitError> {
        self.run(&["tag", "-d", name], "delete tag")?;
        Ok(())
    }

    fn push_tags(&self) -> Result<(), GitError> {
        self.run(&["push", "--tags"], "push tags")?;
        Ok(())
    }
}
