//! Main workflow orchestration logic
//!
//! Sequences the metadata rewrite and the git publish step. Kept apart from
//! `main` so the whole run can be exercised without exiting the process.

use tracing::info;

use crate::config::BumpConfig;
use crate::domain::Version;
use crate::error::Result;
use crate::git::GitRunner;
use crate::metadata;
use crate::publish;

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version written to `metadata.rb` (`0.0.0` if no line matched)
    pub version: Version,

    /// Whether a commit and tag were created
    pub committed: bool,

    /// Remotes that received the push
    pub remotes: Vec<String>,
}

/// Main bump workflow
///
/// 1. Validate the configuration
/// 2. Rewrite the version in `metadata.rb`
/// 3. Stage, and optionally commit, tag and push the change
///
/// The first error aborts the run; nothing done so far is undone.
///
/// # Arguments
///
/// * `config` - Settings built from the command line
/// * `git` - Runner for git subcommands
pub fn run_bump_workflow<G: GitRunner>(config: &BumpConfig, git: &G) -> Result<WorkflowResult> {
    config.validate()?;

    let version = metadata::bump_metadata(&config.path, &config.bump_level)?;
    info!(%version, level = %config.bump_level, "metadata bumped");

    let outcome = publish::publish(git, &config.path, &config.publish_options(version))?;

    Ok(WorkflowResult {
        version,
        committed: outcome.committed,
        remotes: outcome.pushed_to,
    })
}
