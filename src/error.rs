//! Error types for sprint-tag modules using thiserror.

use thiserror::Error;

/// Errors from invoking the system `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {}", .stderr.trim())]
    CommandFailed {
        operation: &'static str,
        stdout: String,
        stderr: String,
    },
}

/// Errors from parsing release tag references.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Tag '{tag}' has no version segment (expected sprint-<major>.<minor>.<patch>-<title>)")]
    MissingVersion { tag: String },

    #[error("Tag '{tag}' has an invalid version segment: {source}")]
    InvalidVersion {
        tag: String,
        #[source]
        source: semver::Error,
    },
}

/// Errors from parsing sprint display names.
#[derive(Error, Debug)]
pub enum SprintError {
    #[error("Sprint name '{name}' does not match 'Sprint <N>: <description>'")]
    MalformedName { name: String },
}

/// Errors from history-scan window timestamps.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Timestamp '{input}' is not in git date format (YYYY-MM-DD HH:MM:SS +ZZZZ): {source}")]
    MalformedTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors from the sprint tracker HTTP API.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Sprint tracker request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Sprint tracker returned HTTP {status}")]
    BadStatus { status: reqwest::StatusCode },

    #[error("Sprint tracker returned an unreadable response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("Sprint tracker response carries no sprint name")]
    MissingSprintName,
}

/// Errors from the release pipeline.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error(
        "No release tag found. Version bumping needs a baseline; create the first sprint tag manually."
    )]
    NoPriorRelease,

    #[error("Tag title must not be empty")]
    EmptyTagTitle,

    #[error("Prompt failed: {0}")]
    Prompt(#[source] dialoguer::Error),

    #[error("Failed to write tag message file: {0}")]
    MessageFile(#[source] std::io::Error),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Sprint(#[from] SprintError),

    #[error(transparent)]
    Window(#[from] WindowError),
}
