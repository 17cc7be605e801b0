//! Stage, commit, tag and push the bumped `metadata.rb`.

use std::path::Path;

use tracing::info;

use crate::domain::Version;
use crate::error::Result;
use crate::git::GitRunner;
use crate::metadata::METADATA_FILE;
use crate::ui;

/// Branch pushed to every remote
pub const PRIMARY_BRANCH: &str = "master";

/// What to do after `metadata.rb` has been rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOptions {
    /// Bump level name, used in the commit message
    pub bump_level: String,
    /// Version that was written; also the tag name
    pub version: Version,
    /// Remotes to push to, in order
    pub remotes: Vec<String>,
    /// Commit, tag and push; when false the file is only staged
    pub push: bool,
    /// Push tags together with the branch via `--follow-tags`
    pub follow_tags: bool,
}

/// Result of a successful publish step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishOutcome {
    /// Whether a commit and tag were created
    pub committed: bool,
    /// Remotes that were pushed to
    pub pushed_to: Vec<String>,
}

/// Splits a comma separated remote list, trimming each entry.
///
/// Entries that are blank after trimming are dropped.
pub fn parse_remotes(remotes: &str) -> Vec<String> {
    remotes
        .split(',')
        .map(str::trim)
        .filter(|remote| !remote.is_empty())
        .map(str::to_string)
        .collect()
}

/// Commit message recorded for a bump
pub fn commit_message(bump_level: &str, version: &Version) -> String {
    format!("{} bump to version {}", bump_level, version)
}

/// Stages `metadata.rb` and, if requested, commits, tags and pushes it.
///
/// Every git invocation runs inside `cookbook`. The first failure is
/// returned immediately; nothing already done is rolled back.
///
/// # Arguments
/// * `git` - Runner used for each git subcommand
/// * `cookbook` - Cookbook directory (git working directory)
/// * `options` - Bump details and push settings
pub fn publish<G: GitRunner>(
    git: &G,
    cookbook: &Path,
    options: &PublishOptions,
) -> Result<PublishOutcome> {
    ui::display_status("Adding changes to Git index");
    git.run(cookbook, &["add", METADATA_FILE])?;

    if !options.push {
        info!("git push disabled, leaving {} staged", METADATA_FILE);
        return Ok(PublishOutcome::default());
    }

    let version = options.version.to_string();

    ui::display_status("Committing changes");
    let message = commit_message(&options.bump_level, &options.version);
    git.run(cookbook, &["commit", "-m", message.as_str(), "-n"])?;

    ui::display_status(&format!("Adding tag '{}'", version));
    git.run(cookbook, &["tag", "-a", version.as_str(), "-m", version.as_str()])?;

    let mut pushed_to = Vec::with_capacity(options.remotes.len());
    for remote in &options.remotes {
        push_remote(git, cookbook, remote, options.follow_tags)?;
        pushed_to.push(remote.clone());
    }

    Ok(PublishOutcome {
        committed: true,
        pushed_to,
    })
}

fn push_remote<G: GitRunner>(
    git: &G,
    cookbook: &Path,
    remote: &str,
    follow_tags: bool,
) -> Result<()> {
    ui::display_status(&format!("Pushing changes to '{}'", remote));

    if follow_tags {
        return git.run(cookbook, &["push", remote, PRIMARY_BRANCH, "--follow-tags"]);
    }

    git.run(cookbook, &["push", remote, PRIMARY_BRANCH])?;

    ui::display_status(&format!("Pushing tags to '{}'", remote));
    git.run(cookbook, &["push", remote, PRIMARY_BRANCH, "--tags"])
}
