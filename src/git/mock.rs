use crate::error::{BumpError, Result};
use crate::git::GitRunner;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded `git` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub workdir: PathBuf,
    pub args: Vec<String>,
}

/// Mock git runner for testing without spawning processes
pub struct MockGit {
    invocations: Mutex<Vec<Invocation>>,
    fail_on: Option<Vec<String>>,
}

impl MockGit {
    /// Create a mock where every invocation succeeds
    pub fn new() -> Self {
        MockGit {
            invocations: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock that fails on the first invocation whose arguments
    /// start with `prefix` (e.g. `["push", "upstream"]`)
    pub fn failing_on(prefix: &[&str]) -> Self {
        MockGit {
            invocations: Mutex::new(Vec::new()),
            fail_on: Some(prefix.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// All invocations so far, including a failing one
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Argument vectors of all invocations, joined with spaces
    pub fn commands(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|call| call.args.join(" "))
            .collect()
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for MockGit {
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<()> {
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(Invocation {
                workdir: workdir.to_path_buf(),
                args: args.iter().map(|s| s.to_string()).collect(),
            });
        }

        let should_fail = self.fail_on.as_ref().is_some_and(|prefix| {
            args.len() >= prefix.len() && args.iter().zip(prefix).all(|(a, p)| *a == p.as_str())
        });

        if should_fail {
            return Err(BumpError::Subprocess {
                command: args.join(" "),
                code: 1,
                stderr: "mock failure".to_string(),
            });
        }

        Ok(())
    }
}
