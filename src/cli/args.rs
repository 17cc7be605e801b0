use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{BumpConfig, DEFAULT_BUMP_LEVEL, DEFAULT_GIT_REMOTES};

/// Long flags that may also be spelled with a single dash (`-path`)
pub const LONG_FLAGS: &[&str] = &[
    "path",
    "bump-level",
    "git-push",
    "git-use-follow-tags",
    "git-remotes",
    "help",
    "version",
];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "cookbook-bump",
    version,
    about = "Bump a cookbook's metadata.rb version, then commit, tag and push it"
)]
pub struct Args {
    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        help = "Full or relative path to the cookbook directory. REQUIRED."
    )]
    pub path: String,

    #[arg(
        long,
        default_value = DEFAULT_BUMP_LEVEL,
        help = "Version level to bump the cookbook (patch, minor, major)"
    )]
    pub bump_level: String,

    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set,
        help = "Whether or not changes should be committed and pushed"
    )]
    pub git_push: bool,

    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set,
        help = "Push tags together with the branch using --follow-tags"
    )]
    pub git_use_follow_tags: bool,

    #[arg(
        long,
        default_value = DEFAULT_GIT_REMOTES,
        help = "Comma separated list of Git remotes"
    )]
    pub git_remotes: String,
}

impl Args {
    /// Parse the process arguments, accepting `-flag` as well as `--flag`
    pub fn parse_normalized() -> Self {
        Args::parse_from(normalize_args(std::env::args_os()))
    }

    /// Convert into the run configuration
    pub fn into_config(self) -> BumpConfig {
        BumpConfig {
            path: PathBuf::from(self.path),
            bump_level: self.bump_level,
            git_push: self.git_push,
            git_use_follow_tags: self.git_use_follow_tags,
            git_remotes: self.git_remotes,
        }
    }
}

/// Rewrites single-dash long flags (`-path x`, `-git-push=false`) to their
/// double-dash form so clap can parse them. Everything else passes through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(text) if is_single_dash_long_flag(text) => OsString::from(format!("-{}", text)),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix('-') else {
        return false;
    };
    if flag.starts_with('-') {
        return false;
    }

    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
