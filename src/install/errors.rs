//! Error types for bootstrap operations.
//!
//! Each error variant includes an actionable fix suggestion to help users
//! resolve the issue.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a bootstrap run.
///
/// Only the checked steps produce these. Failures of best-effort steps
/// (repository update, package installs, launching the binary) are logged and
/// swallowed instead.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::BootstrapError;
///
/// fn handle_error(error: BootstrapError) {
///     eprintln!("[x] {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BootstrapError {
    /// Build dependencies are missing and the distribution is not one we
    /// know how to install packages on.
    #[error("Unsupported distribution. Install manually: {}", missing.join(" "))]
    UnsupportedDistro {
        /// Dependencies that still need installing.
        missing: Vec<String>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A must-succeed command exited with a non-zero status.
    #[error("Command `{command}` failed with exit code {exit_code:?}")]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// Exit code, or `None` if killed by a signal.
        exit_code: Option<i32>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The OS refused to execute the program.
    #[error("Permission denied running `{command}`: {message}")]
    PermissionDenied {
        command: String,
        message: String,
        fix: String,
    },

    /// The program could not be started at all (usually not found).
    #[error("Failed to start `{command}`: {message}")]
    Spawn {
        command: String,
        message: String,
        fix: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error at {}: {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        fix: String,
    },

    /// The user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable { fix: String },
}

impl BootstrapError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::UnsupportedDistro { fix, .. } => fix,
            Self::CommandFailed { fix, .. } => fix,
            Self::PermissionDenied { fix, .. } => fix,
            Self::Spawn { fix, .. } => fix,
            Self::Io { fix, .. } => fix,
            Self::HomeDirUnavailable { fix } => fix,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            fix: format!("Check that {} is writable", path.display()),
            message: err.to_string(),
            path,
        }
    }

    pub(crate) fn unsupported_distro(missing: &[String]) -> Self {
        Self::UnsupportedDistro {
            missing: missing.to_vec(),
            fix: format!(
                "Install {} with your package manager and run again",
                missing.join(", ")
            ),
        }
    }
}
