use crate::error::{BumpError, Result};
use crate::git::GitRunner;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, instrument};

/// Runs the `git` executable found on `PATH` (or a custom program)
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: OsString,
}

impl SystemGit {
    /// Use `git` from `PATH`
    pub fn new() -> Self {
        SystemGit {
            program: OsString::from("git"),
        }
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<OsString>) -> Self {
        SystemGit {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    #[instrument(skip(self, workdir), fields(workdir = %workdir.display()))]
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<()> {
        let start = Instant::now();
        let command = args.join(" ");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|source| BumpError::SubprocessLaunch {
                command: command.clone(),
                source,
            })?;

        debug!(
            command = %command,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git (CLI)"
        );

        if !output.status.success() {
            return Err(BumpError::Subprocess {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_launch_error() {
        let git = SystemGit::with_program("/nonexistent/bin/git-cookbook-bump");
        let dir = tempfile::tempdir().unwrap();

        let err = git.run(dir.path(), &["status"]).unwrap_err();
        assert!(matches!(err, BumpError::SubprocessLaunch { .. }));
        assert!(err.to_string().contains("git status"));
    }

    #[test]
    fn test_missing_workdir_is_launch_error() {
        let git = SystemGit::new();
        let result = git.run(Path::new("/nonexistent/cookbook/dir"), &["status"]);
        assert!(matches!(result, Err(BumpError::SubprocessLaunch { .. })));
    }
}
