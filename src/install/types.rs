//! Type definitions for external command invocations.
//!
//! Every side effect this crate has on the host (package installs, git,
//! the build, launching the binary) goes through a [`StructuredCommand`].

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// A structured command for programmatic execution.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::StructuredCommand;
///
/// let cmd = StructuredCommand::new("git", ["pull"]).in_dir("/tmp/fastfetch");
/// assert_eq!(cmd.raw_command(), "git pull");
/// assert!(cmd.cwd.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCommand {
    /// The program to execute (e.g., "sudo", "git", "cmake").
    ///
    /// Kept as an `OsString` so paths with non-UTF-8 bytes reach the OS
    /// unchanged.
    pub program: OsString,

    /// Arguments to pass to the program.
    pub args: Vec<OsString>,

    /// Working directory; `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
}

impl StructuredCommand {
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command inside `dir`.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Space-joined command line for display only.
    ///
    /// Invalid UTF-8 is replaced lossily; never feed this back to the OS.
    pub fn raw_command(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.to_string_lossy());
        parts.extend(self.args.iter().map(|a| a.to_string_lossy()));
        parts.join(" ")
    }
}

impl fmt::Display for StructuredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_command())
    }
}

/// Exit status of a finished command.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// How a non-zero exit from a command is treated.
///
/// The clone and the two build steps use `MustSucceed`. The repository
/// update, package installs and the final launch use `BestEffort`, so their
/// exit status never stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log a warning and continue.
    BestEffort,
    /// Abort with [`crate::BootstrapError::CommandFailed`].
    MustSucceed,
}
