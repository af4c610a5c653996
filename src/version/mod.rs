//! Version management: release tag parsing and bump policy.

pub mod bump;
pub mod tag;

pub use bump::{BumpClass, next_version};
pub use tag::{compose_tag_name, latest_tag_from_decorations, parse_release_tag};
