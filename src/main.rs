//! sprint-tag - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use sprint_tag::git::SystemGit;
use sprint_tag::release::{ConsoleOperator, ReleaseConfig, ReleaseOutcome, run_release};
use sprint_tag::tracker::{DEFAULT_TRACKER_URL, HttpTracker};

/// Draft and create the next annotated sprint release tag.
#[derive(Parser, Debug)]
#[command(name = "sprint-tag")]
#[command(about = "Draft and create the next annotated sprint release tag")]
#[command(version)]
struct Cli {
    /// Sprint tracker username (prompted for when absent)
    #[arg(long, env = "SPRINT_TRACKER_USER")]
    tracker_user: Option<String>,

    /// Sprint tracker password (prompted for when absent; never echoed)
    #[arg(long, env = "SPRINT_TRACKER_PASS", hide_env_values = true)]
    tracker_pass: Option<String>,

    /// Sprint tracker base URL
    #[arg(long, env = "SPRINT_TRACKER_URL", default_value = DEFAULT_TRACKER_URL)]
    tracker_url: String,

    /// Print the tag name and message without creating anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sprint_tag=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let username = match cli.tracker_user {
        Some(user) => user,
        None => Input::<String>::new()
            .with_prompt("Tracker username")
            .interact_text()
            .context("Failed to read tracker username")?,
    };

    let password = match cli.tracker_pass {
        Some(pass) => pass,
        None => Password::new()
            .with_prompt("Tracker password")
            .interact()
            .context("Failed to read tracker password")?,
    };

    let workdir = std::env::current_dir().context("Failed to resolve working directory")?;
    let git = SystemGit::new(workdir);
    let tracker = HttpTracker::new(&cli.tracker_url, &username, &password)
        .context("Failed to build tracker client")?;
    let operator = ConsoleOperator;
    let config = ReleaseConfig {
        dry_run: cli.dry_run,
    };

    match run_release(&git, &tracker, &operator, &config).await? {
        ReleaseOutcome::Tagged { tag_name } => {
            println!("✓ Created and pushed tag {}", tag_name);
        }
        ReleaseOutcome::Declined => {
            println!("Aborted. No tag was created.");
        }
        ReleaseOutcome::DryRun { tag_name } => {
            println!("Dry run complete. Tag {} was not created.", tag_name);
        }
    }

    Ok(())
}
