//! Command execution against the host.
//!
//! [`System`] is the seam between the bootstrap logic and the machine it runs
//! on. [`HostSystem`] talks to the real OS; tests swap in a recorder.

use crate::detection::find_executable;
use crate::install::{BootstrapError, CommandStatus, FailurePolicy, StructuredCommand};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, warn};

/// Host operations the bootstrap depends on.
pub trait System {
    /// Resolve `name` against the executable search path.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// Run `command` to completion with inherited stdio.
    ///
    /// `Err` means the process could not be started; a non-zero exit is
    /// reported through the returned [`CommandStatus`].
    fn run(
        &self,
        command: &StructuredCommand,
    ) -> impl Future<Output = io::Result<CommandStatus>> + Send;
}

/// The real host: PATH lookup via `which`, processes via `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl System for HostSystem {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        find_executable(name)
    }

    async fn run(&self, command: &StructuredCommand) -> io::Result<CommandStatus> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).kill_on_drop(true);
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await?;
        Ok(status.into())
    }
}

/// Run a command whose exit status is not allowed to stop the run.
///
/// A non-zero exit is logged and returned; only a failure to start the
/// process is an error.
pub async fn run_best_effort<S: System>(
    system: &S,
    command: &StructuredCommand,
) -> Result<CommandStatus, BootstrapError> {
    run_with_policy(system, command, FailurePolicy::BestEffort).await
}

/// Run a command that must exit zero.
pub async fn run_must_succeed<S: System>(
    system: &S,
    command: &StructuredCommand,
) -> Result<CommandStatus, BootstrapError> {
    run_with_policy(system, command, FailurePolicy::MustSucceed).await
}

pub async fn run_with_policy<S: System>(
    system: &S,
    command: &StructuredCommand,
    policy: FailurePolicy,
) -> Result<CommandStatus, BootstrapError> {
    let raw = command.raw_command();
    debug!(command = %raw, cwd = ?command.cwd, ?policy, "running command");

    let status = system.run(command).await.map_err(|e| spawn_error(&raw, e))?;

    if status.success() {
        return Ok(status);
    }

    match policy {
        FailurePolicy::BestEffort => {
            warn!(command = %raw, exit_code = ?status.code, "command failed, continuing");
            Ok(status)
        }
        FailurePolicy::MustSucceed => Err(BootstrapError::CommandFailed {
            fix: format!("See the output of `{}` above for details", raw),
            command: raw,
            exit_code: status.code,
        }),
    }
}

fn spawn_error(raw: &str, e: io::Error) -> BootstrapError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        return BootstrapError::PermissionDenied {
            command: raw.to_string(),
            message: e.to_string(),
            fix: "Check that the program is executable".to_string(),
        };
    }
    BootstrapError::Spawn {
        command: raw.to_string(),
        message: e.to_string(),
        fix: "Check that the program is installed and on PATH".to_string(),
    }
}
