//! History-scan window bound derived from the previous release tag.

use chrono::{DateTime, Duration};

use crate::error::WindowError;

/// Timestamp format emitted by `git log --format=%ci`.
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Compute the lower bound for scanning history after a release tag.
///
/// `--since` is inclusive of commits at the given time and these timestamps
/// have whole-minute relevance, so the bound is the tag's commit time plus
/// one minute; a scan from it cannot re-include the tag commit itself.
pub fn scan_lower_bound(tag_timestamp: &str) -> Result<String, WindowError> {
    let parsed = DateTime::parse_from_str(tag_timestamp.trim(), GIT_DATE_FORMAT).map_err(
        |source| WindowError::MalformedTimestamp {
            input: tag_timestamp.to_string(),
            source,
        },
    )?;

    Ok((parsed + Duration::minutes(1))
        .format(GIT_DATE_FORMAT)
        .to_string())
}
