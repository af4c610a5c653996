//! Sprint display-name parsing and rollover detection.
//!
//! The tracker reports sprints as `Sprint <N>: <description>`. The ordinal is
//! the second whitespace-delimited token, with its trailing `:` stripped.

use semver::Version;

use crate::error::SprintError;

/// Parse the sprint ordinal out of a sprint display name.
pub fn parse_sprint_ordinal(name: &str) -> Result<u64, SprintError> {
    let token = name
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| SprintError::MalformedName {
            name: name.to_string(),
        })?;

    let digits = token.strip_suffix(':').unwrap_or(token);
    digits.parse().map_err(|_| SprintError::MalformedName {
        name: name.to_string(),
    })
}

/// Whether the tracker's sprint differs from the one the previous release was
/// cut in. A release version's major component is its sprint's ordinal.
pub fn is_new_sprint(sprint_ordinal: u64, current: &Version) -> bool {
    current.major != sprint_ordinal
}
