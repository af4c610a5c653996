//! The release pipeline.
//!
//! Sequences tag discovery, version derivation, sprint classification,
//! operator prompts, merge scanning, and the confirmation-gated tag + push.
//! All collaborators enter through narrow traits, so the sequencing is
//! testable without a repository, network, or terminal.

pub mod message;
pub mod operator;

use std::io::Write;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::ReleaseError;
use crate::git::{GitCli, extract_merged_branches, scan_lower_bound};
use crate::sprint::{is_new_sprint, parse_sprint_ordinal};
use crate::tracker::SprintTracker;
use crate::version::{
    BumpClass, compose_tag_name, latest_tag_from_decorations, next_version, parse_release_tag,
};

use self::message::render_tag_message;

pub use operator::{ConsoleOperator, Operator};

/// Configuration for a release run.
#[derive(Debug, Clone, Default)]
pub struct ReleaseConfig {
    /// Render the tag name and message, then stop before the confirmation;
    /// nothing is created or pushed.
    pub dry_run: bool,
}

/// How a release run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The annotated tag was created and tags were pushed.
    Tagged { tag_name: String },
    /// The operator declined the final confirmation; nothing was created.
    Declined,
    /// Dry run; nothing was created.
    DryRun { tag_name: String },
}

/// Run the release pipeline.
pub async fn run_release(
    git: &dyn GitCli,
    tracker: &dyn SprintTracker,
    operator: &dyn Operator,
    config: &ReleaseConfig,
) -> Result<ReleaseOutcome, ReleaseError> {
    // ── Stage 1: Previous release ──
    let decorations = git.decorated_tags()?;
    let previous_tag =
        latest_tag_from_decorations(&decorations).ok_or(ReleaseError::NoPriorRelease)?;
    let current_version = parse_release_tag(&previous_tag)?;

    operator.show(&format!("Current release: {}", previous_tag));

    // ── Stage 2: Sprint classification ──
    let sprint_name = match tracker.current_sprint_name().await {
        Ok(name) => {
            operator.show(&format!("Current sprint: {}", name));
            Some(name)
        }
        Err(e) => {
            warn!(error = %e, "Sprint tracker unavailable");
            operator.show(
                "Warning: could not retrieve the current sprint from the tracker; \
                 falling back to manual version selection.",
            );
            None
        }
    };

    // ── Stage 3: Bump class ──
    // Without a sprint name no rollover can be detected, so the run stays in
    // the previous release's sprint and the header ordinal falls back to its
    // major component.
    let (bump, sprint_ordinal) = match sprint_name {
        Some(name) => {
            let ordinal = parse_sprint_ordinal(&name)?;
            if is_new_sprint(ordinal, &current_version) {
                operator.show("A new sprint has started.");
                (BumpClass::NewSprint { sprint: ordinal }, ordinal)
            } else {
                (ask_major_or_minor(operator)?, ordinal)
            }
        }
        None => (ask_major_or_minor(operator)?, current_version.major),
    };

    let new_version = next_version(&current_version, bump);
    debug!(%current_version, %new_version, "Derived next version");

    // ── Stage 4: Tag name ──
    let title = operator.ask_line("Tag title (use \"-\" instead of whitespace)")?;
    let title = title.trim();
    if title.is_empty() {
        return Err(ReleaseError::EmptyTagTitle);
    }

    let tag_name = compose_tag_name(&new_version, title);
    operator.show(&format!("The tag will be named: {}", tag_name));

    // ── Stage 5: Merged branches since the previous release ──
    let branches = collect_merged_branches(git)?;

    // ── Stage 6: Message preview ──
    let tag_message = render_tag_message(sprint_ordinal, &branches);
    operator.show("The following message will be used for the annotated tag:");
    operator.show(&tag_message);

    if config.dry_run {
        return Ok(ReleaseOutcome::DryRun { tag_name });
    }

    // ── Stage 7: Confirmation-gated tag + push ──
    let confirmed = operator.confirm("Create the tag with the information from above?", false)?;
    if !confirmed {
        return Ok(ReleaseOutcome::Declined);
    }

    let mut message_file = NamedTempFile::new().map_err(ReleaseError::MessageFile)?;
    message_file
        .write_all(tag_message.as_bytes())
        .map_err(ReleaseError::MessageFile)?;
    message_file.flush().map_err(ReleaseError::MessageFile)?;

    git.create_annotated_tag(&tag_name, message_file.path())?;

    if let Err(e) = git.push_tags() {
        // The tag only exists locally at this point, so deleting it leaves
        // the repository as the run found it.
        warn!(error = %e, tag = %tag_name, "Push failed; rolling back local tag");
        if let Err(rollback) = git.delete_tag(&tag_name) {
            warn!(error = %rollback, tag = %tag_name, "Rollback failed; delete the tag manually");
        }
        return Err(e.into());
    }

    Ok(ReleaseOutcome::Tagged { tag_name })
}

/// The major/minor question used when no sprint rollover applies.
fn ask_major_or_minor(operator: &dyn Operator) -> Result<BumpClass, ReleaseError> {
    let major = operator.confirm("Is this a major version (new features added)?", false)?;
    Ok(if major {
        BumpClass::Major
    } else {
        BumpClass::Minor
    })
}

/// Scan history after the previous release tag for merged branches.
///
/// A missing tag date and an empty merge log are both valid; each yields an
/// empty branch list and, downstream, an empty-bodied message.
fn collect_merged_branches(git: &dyn GitCli) -> Result<Vec<String>, ReleaseError> {
    let dates = git.release_tag_dates()?;
    let Some(tag_date) = dates.lines().map(str::trim).find(|line| !line.is_empty()) else {
        warn!("No release tag date found; skipping the merge scan");
        return Ok(Vec::new());
    };

    let bound = scan_lower_bound(tag_date)?;
    let subjects = git.merge_subjects_since(&bound)?;
    Ok(extract_merged_branches(&subjects))
}
