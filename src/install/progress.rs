//! Progress reporting types for a bootstrap run.
//!
//! The [`Progress`] enum represents the discrete stages of the run. They are
//! reported through a callback so the caller decides how to render them.

use crate::Distro;

/// Progress stages during a bootstrap run.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::Progress;
///
/// fn on_progress(progress: Progress) {
///     match &progress {
///         Progress::DependenciesMissing { missing } => {
///             println!("[!] {}: {}", progress.description(), missing.join(", "));
///         }
///         other => println!("[+] {}", other.description()),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The binary was not found; a fresh install is starting.
    Started,

    /// The binary already exists; only the runner will be invoked.
    AlreadyInstalled,

    /// Looking up build dependencies on the search path.
    CheckingDependencies,

    /// Every build dependency is present.
    DependenciesPresent,

    /// Some build dependencies are missing.
    DependenciesMissing {
        /// Commands not found on the search path.
        missing: Vec<String>,
    },

    /// Running the package manager.
    InstallingDependencies {
        /// The detected distribution family.
        distro: Distro,
    },

    /// Starting the fetch-and-build phase.
    Fetching,

    /// The checkout exists and is being updated in place.
    Updating,

    /// Cloning a fresh checkout.
    Cloning,

    /// Running configure and build.
    Building,

    /// Launching the binary.
    Running,

    /// A fresh install finished and the binary has run.
    Completed,
}

impl Progress {
    /// Human-readable description of the stage.
    ///
    /// ```rust
    /// use auto_fastfetch::Progress;
    ///
    /// assert_eq!(Progress::CheckingDependencies.description(), "Checking dependencies");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Started => "Starting installation",
            Self::AlreadyInstalled => "Already installed",
            Self::CheckingDependencies => "Checking dependencies",
            Self::DependenciesPresent => "All dependencies are present",
            Self::DependenciesMissing { .. } => "Missing dependencies",
            Self::InstallingDependencies { .. } => "Installing dependencies",
            Self::Fetching => "Downloading and building",
            Self::Updating => "Already cloned, updating",
            Self::Cloning => "Cloning repository",
            Self::Building => "Building",
            Self::Running => "Running",
            Self::Completed => "Installation complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_description() {
        assert_eq!(Progress::Started.description(), "Starting installation");
        assert_eq!(
            Progress::DependenciesMissing {
                missing: vec!["git".to_string()]
            }
            .description(),
            "Missing dependencies"
        );
        assert_eq!(
            Progress::InstallingDependencies {
                distro: Distro::Arch
            }
            .description(),
            "Installing dependencies"
        );
        assert_eq!(Progress::Updating.description(), "Already cloned, updating");
    }
}
