//! # auto-fastfetch
//!
//! Builds [fastfetch](https://github.com/fastfetch-cli/fastfetch) from source
//! on first use and runs it.
//!
//! On every run the fixed binary path `~/apps/fastfetch/build/fastfetch` is
//! checked. If it exists it is simply launched. Otherwise missing build tools
//! (`git`, `cmake`, `make`, `gcc`) are installed with the distribution's
//! package manager (apt, pacman or dnf), the repository is cloned or updated,
//! built with CMake, and the result launched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use auto_fastfetch::{bootstrap, Config, HostSystem, Outcome};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), auto_fastfetch::BootstrapError> {
//!     let config = Config::from_home_dir()?;
//!     let outcome = bootstrap(&HostSystem, &config, |progress| {
//!         println!("[+] {}", progress.description());
//!     })
//!     .await?;
//!     assert!(matches!(outcome, Outcome::AlreadyInstalled | Outcome::Installed));
//!     Ok(())
//! }
//! ```

mod bootstrap;
mod config;
mod detection;
mod distro;
mod install;

pub use bootstrap::{bootstrap, Outcome};
pub use config::{Config, DEPENDENCIES, OS_RELEASE_PATH, REPOSITORY_URL, TOOL_NAME};
pub use detection::{classify_os_release, detect_distro, missing_dependencies, pretty_name};
pub use distro::Distro;
pub use install::{
    fetch_and_build, install_dependencies, run_best_effort, run_binary, run_must_succeed,
    run_with_policy, BootstrapError, CommandStatus, FailurePolicy, HostSystem, Progress,
    StructuredCommand, System,
};
