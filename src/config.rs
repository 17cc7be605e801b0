use std::path::PathBuf;

use crate::domain::Version;
use crate::error::{BumpError, Result};
use crate::publish::{parse_remotes, PublishOptions};

/// Default bump level when `-bump-level` is not given
pub const DEFAULT_BUMP_LEVEL: &str = "patch";

/// Default remote list when `-git-remotes` is not given
pub const DEFAULT_GIT_REMOTES: &str = "upstream, origin";

/// Settings for one cookbook-bump run.
///
/// Built from the command line; there is no configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpConfig {
    /// Cookbook directory containing `metadata.rb`
    pub path: PathBuf,

    /// `patch`, `minor` or `major`; validated when the version is bumped
    pub bump_level: String,

    /// Commit, tag and push after staging
    pub git_push: bool,

    /// Push tags with `--follow-tags` instead of a separate `--tags` push
    pub git_use_follow_tags: bool,

    /// Comma separated remote names
    pub git_remotes: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            path: PathBuf::new(),
            bump_level: DEFAULT_BUMP_LEVEL.to_string(),
            git_push: true,
            git_use_follow_tags: true,
            git_remotes: DEFAULT_GIT_REMOTES.to_string(),
        }
    }
}

impl BumpConfig {
    /// Ensures the required cookbook path is present.
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is usable
    /// * `Err(BumpError::Config)` - If `path` is empty
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(BumpError::config("path to the cookbook directory is required"));
        }
        Ok(())
    }

    /// Remote names parsed from `git_remotes`
    pub fn remotes(&self) -> Vec<String> {
        parse_remotes(&self.git_remotes)
    }

    /// Publish settings for the version that was just written
    pub fn publish_options(&self, version: Version) -> PublishOptions {
        PublishOptions {
            bump_level: self.bump_level.clone(),
            version,
            remotes: self.remotes(),
            push: self.git_push,
            follow_tags: self.git_use_follow_tags,
        }
    }
}
