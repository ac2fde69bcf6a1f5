//! Bootstrap configuration.
//!
//! [`Config`] holds every fixed value of a run: where the checkout lives,
//! which binary to launch, where to clone from and what has to be on `PATH`
//! before building. It is built once and passed by reference.

use crate::BootstrapError;
use std::path::{Path, PathBuf};

/// Name of the tool being bootstrapped.
pub const TOOL_NAME: &str = "fastfetch";

/// Upstream repository.
pub const REPOSITORY_URL: &str = "https://github.com/fastfetch-cli/fastfetch";

/// Commands required to build, in check order.
pub const DEPENDENCIES: &[&str] = &["git", "cmake", "make", "gcc"];

/// OS identification file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Fixed values for a single run.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::Config;
/// use std::path::Path;
///
/// let config = Config::for_home("/home/ana");
/// assert_eq!(config.install_dir, Path::new("/home/ana/apps/fastfetch"));
/// assert_eq!(config.binary_path, Path::new("/home/ana/apps/fastfetch/build/fastfetch"));
/// assert_eq!(config.dependencies, ["git", "cmake", "make", "gcc"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source checkout and build root: `<home>/apps/<tool>`.
    pub install_dir: PathBuf,

    /// Compiled executable: `<install_dir>/build/<tool>`.
    pub binary_path: PathBuf,

    /// Where the checkout is cloned from.
    pub repository_url: String,

    /// Commands that must resolve on `PATH` before building.
    pub dependencies: Vec<String>,

    /// File read to classify the distribution.
    pub os_release_path: PathBuf,
}

impl Config {
    /// Configuration rooted at an explicit home directory.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        let install_dir = home.as_ref().join("apps").join(TOOL_NAME);
        Self {
            binary_path: install_dir.join("build").join(TOOL_NAME),
            install_dir,
            repository_url: REPOSITORY_URL.to_string(),
            dependencies: DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
        }
    }

    /// Configuration rooted at the current user's home directory.
    pub fn from_home_dir() -> Result<Self, BootstrapError> {
        dirs::home_dir()
            .map(Self::for_home)
            .ok_or_else(|| BootstrapError::HomeDirUnavailable {
                fix: "Set the HOME environment variable".to_string(),
            })
    }

    /// Directory the configure and build steps run in.
    pub fn build_dir(&self) -> PathBuf {
        self.install_dir.join("build")
    }

    /// Replace the release file, mainly for tests.
    pub fn with_os_release_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.os_release_path = path.into();
        self
    }
}
