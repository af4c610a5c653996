//! The version-control collaborator: git invocations and output parsing.

pub mod cli;
pub mod merges;
pub mod window;

pub use cli::{GitCli, SystemGit};
pub use merges::extract_merged_branches;
pub use window::scan_lower_bound;
