//! sprint-tag - drafts and creates annotated sprint release tags.
//!
//! # Overview
//!
//! sprint-tag reads the most recent `sprint-<version>-<title>` tag, asks the
//! sprint tracker whether a new sprint has begun, derives the next version,
//! collects the branches merged since the previous release, and, after
//! operator confirmation, creates an annotated tag whose message lists them
//! and pushes tags to the remote.

pub mod error;
pub mod git;
pub mod release;
pub mod sprint;
pub mod tracker;
pub mod version;

// Re-export commonly used types
pub use error::{GitError, ReleaseError, SprintError, TagError, TrackerError, WindowError};
pub use git::{GitCli, SystemGit};
pub use release::{ConsoleOperator, Operator, ReleaseConfig, ReleaseOutcome, run_release};
pub use tracker::{HttpTracker, SprintTracker};
pub use version::BumpClass;
