//! The top-level install-or-run flow.

use crate::detection::{detect_distro, missing_dependencies};
use crate::install::{
    fetch_and_build, install_dependencies, run_binary, BootstrapError, Progress, System,
};
use crate::Config;
use tracing::info;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The binary already existed and was launched; nothing was built.
    AlreadyInstalled,
    /// Dependencies were checked, the tool was built and then launched.
    Installed,
}

/// Run the tool, building it first if its binary is missing.
///
/// # Flow
///
/// - Binary present: launch it and return [`Outcome::AlreadyInstalled`].
///   No dependency or build work happens, even if the checkout is stale.
/// - Binary absent:
///   1. Look up every configured dependency on `PATH`
///   2. If any are missing, detect the distribution and install them
///      (unknown distribution aborts here with
///      [`BootstrapError::UnsupportedDistro`])
///   3. Update or clone the checkout, then configure and build
///   4. Launch the binary
///
/// Progress is reported through `on_progress`. There are no retries; calling
/// again after a failure starts over from the binary check.
///
/// # Example
///
/// ```rust,no_run
/// use auto_fastfetch::{bootstrap, Config, HostSystem};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = Config::from_home_dir().unwrap();
///     match bootstrap(&HostSystem, &config, |p| println!("{}", p.description())).await {
///         Ok(outcome) => println!("done: {:?}", outcome),
///         Err(e) => eprintln!("{} ({})", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn bootstrap<S, F>(
    system: &S,
    config: &Config,
    on_progress: F,
) -> Result<Outcome, BootstrapError>
where
    S: System,
    F: Fn(Progress),
{
    if config.binary_path.exists() {
        info!(binary = %config.binary_path.display(), "binary present, skipping install");
        on_progress(Progress::AlreadyInstalled);
        run_binary(system, config, &on_progress).await?;
        return Ok(Outcome::AlreadyInstalled);
    }

    on_progress(Progress::Started);

    on_progress(Progress::CheckingDependencies);
    let missing = missing_dependencies(system, &config.dependencies);
    if missing.is_empty() {
        on_progress(Progress::DependenciesPresent);
    } else {
        on_progress(Progress::DependenciesMissing {
            missing: missing.clone(),
        });
        let distro = detect_distro(&config.os_release_path).await;
        if distro.package_manager().is_some() {
            on_progress(Progress::InstallingDependencies { distro });
        }
        install_dependencies(system, distro, &missing).await?;
    }

    fetch_and_build(system, config, &on_progress).await?;
    run_binary(system, config, &on_progress).await?;

    on_progress(Progress::Completed);
    Ok(Outcome::Installed)
}
