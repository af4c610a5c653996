//! Release tag parsing and composition.
//!
//! Release tags have the fixed shape `sprint-<major>.<minor>.<patch>-<title>`,
//! e.g. `sprint-56.2.0-remove-beta-logos`.

use semver::Version;

use crate::error::TagError;

/// Prefix shared by every release tag.
pub const TAG_PREFIX: &str = "sprint";

/// Parse the version triple out of a release tag reference.
///
/// The version is the second `-`-delimited segment. The prefix is not
/// validated; the tag listing is already filtered to release tags.
pub fn parse_release_tag(tag: &str) -> Result<Version, TagError> {
    let mut segments = tag.split('-');
    segments.next();

    let version = segments.next().ok_or_else(|| TagError::MissingVersion {
        tag: tag.to_string(),
    })?;

    Version::parse(version).map_err(|source| TagError::InvalidVersion {
        tag: tag.to_string(),
        source,
    })
}

/// Compose the tag name for a new release.
///
/// The title is used verbatim; operators write `-` instead of whitespace.
pub fn compose_tag_name(version: &Version, title: &str) -> String {
    format!("{}-{}-{}", TAG_PREFIX, version, title)
}

/// Extract the most recent tag name from decorated log output.
///
/// Input is one decoration list per line, newest commit first, e.g.
/// ` (HEAD -> master, tag: sprint-56.2.0-remove-beta-logos)`. Returns the
/// first `tag:` decoration found, or `None` when no line carries one (no
/// release has been tagged yet).
pub fn latest_tag_from_decorations(log: &str) -> Option<String> {
    for line in log.lines() {
        if let Some(start) = line.find("tag: ") {
            let rest = &line[start + "tag: ".len()..];
            let end = rest.find([',', ')']).unwrap_or(rest.len());
            let name = rest[..end].trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}
