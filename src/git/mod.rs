//! Git operations abstraction layer
//!
//! cookbook-bump drives the `git` executable rather than a library, so the
//! abstraction is a single method: run one subcommand in a given working
//! directory. The directory is always passed explicitly; the process working
//! directory is never changed.
//!
//! - [command::SystemGit]: runs the real `git` binary
//! - [mock::MockGit]: records invocations for tests
//!
//! ```rust
//! # use cookbook_bump::git::GitRunner;
//! # use std::path::Path;
//! # fn example<G: GitRunner>(git: &G) -> cookbook_bump::Result<()> {
//! git.run(Path::new("cookbooks/apt"), &["add", "metadata.rb"])?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;

pub use command::SystemGit;
pub use mock::MockGit;

use crate::error::Result;
use std::path::Path;

/// Runs git subcommands on behalf of the publish step
///
/// ## Error Handling
///
/// A subcommand that cannot be launched or exits non-zero must be reported as
/// an error; callers treat every error as fatal and stop immediately.
pub trait GitRunner {
    /// Run `git <args>` with `workdir` as its working directory
    ///
    /// # Arguments
    /// * `workdir` - Directory the subprocess runs in (the cookbook path)
    /// * `args` - Argument vector after `git`, e.g. `["tag", "-a", "1.2.3", "-m", "1.2.3"]`
    ///
    /// # Returns
    /// * `Ok(())` - The subcommand exited successfully
    /// * `Err` - Launch failure or non-zero exit
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<()>;
}
