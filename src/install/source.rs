//! Fetching, building and launching the tool from source.

use crate::install::{
    run_best_effort, run_must_succeed, BootstrapError, Progress, StructuredCommand, System,
};
use crate::Config;
use std::ffi::OsString;
use tracing::info;

/// Ensure an up-to-date checkout and a compiled binary.
///
/// 1. If the install directory exists, `git pull` inside it (best-effort).
///    Otherwise create its parent and `git clone` into it (must succeed).
/// 2. Create the build directory.
/// 3. Run `cmake ..` then `make` in the build directory (both must succeed).
///
/// Nothing is cleaned up on failure; re-running picks up from the existing
/// checkout.
pub async fn fetch_and_build<S, F>(
    system: &S,
    config: &Config,
    on_progress: &F,
) -> Result<(), BootstrapError>
where
    S: System,
    F: Fn(Progress),
{
    on_progress(Progress::Fetching);

    if config.install_dir.exists() {
        on_progress(Progress::Updating);
        let pull = StructuredCommand::new("git", ["pull"]).in_dir(&config.install_dir);
        run_best_effort(system, &pull).await?;
    } else {
        on_progress(Progress::Cloning);
        if let Some(parent) = config.install_dir.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BootstrapError::io(parent, e))?;
        }
        let clone = StructuredCommand::new(
            "git",
            [
                OsString::from("clone"),
                OsString::from(&config.repository_url),
                config.install_dir.clone().into_os_string(),
            ],
        );
        run_must_succeed(system, &clone).await?;
    }

    let build_dir = config.build_dir();
    tokio::fs::create_dir_all(&build_dir)
        .await
        .map_err(|e| BootstrapError::io(&build_dir, e))?;

    on_progress(Progress::Building);
    run_must_succeed(system, &StructuredCommand::new("cmake", [".."]).in_dir(&build_dir)).await?;
    run_must_succeed(
        system,
        &StructuredCommand::new("make", Vec::<String>::new()).in_dir(&build_dir),
    )
    .await?;

    info!(binary = %config.binary_path.display(), "build finished");
    Ok(())
}

/// Launch the compiled binary with no arguments.
///
/// The binary's own exit status is not inspected. If it cannot be started
/// at all the launch error is returned as-is.
pub async fn run_binary<S, F>(system: &S, config: &Config, on_progress: &F) -> Result<(), BootstrapError>
where
    S: System,
    F: Fn(Progress),
{
    on_progress(Progress::Running);
    let command = StructuredCommand::new(&config.binary_path, Vec::<OsString>::new());
    run_best_effort(system, &command).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::CommandStatus;
    use std::io;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        fail_program: Option<&'static str>,
        commands: Mutex<Vec<StructuredCommand>>,
    }

    impl System for Recorder {
        fn find_executable(&self, _name: &str) -> Option<PathBuf> {
            None
        }

        async fn run(&self, command: &StructuredCommand) -> io::Result<CommandStatus> {
            self.commands.lock().unwrap().push(command.clone());
            if self.fail_program.is_some_and(|p| command.program == p) {
                Ok(CommandStatus::from_code(1))
            } else {
                Ok(CommandStatus::SUCCESS)
            }
        }
    }

    impl Recorder {
        fn raw(&self) -> Vec<String> {
            self.commands
                .lock()
                .unwrap()
                .iter()
                .map(|c| c.raw_command())
                .collect()
        }
    }

    fn noop(_: Progress) {}

    #[tokio::test]
    async fn test_clone_when_missing() {
        let home = tempfile::tempdir().unwrap();
        let config = Config::for_home(home.path());
        let system = Recorder::default();

        fetch_and_build(&system, &config, &noop).await.unwrap();

        let commands = system.commands.lock().unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].program, "git");
        assert_eq!(
            commands[0].args,
            vec![
                OsString::from("clone"),
                OsString::from(&config.repository_url),
                config.install_dir.clone().into_os_string(),
            ]
        );
        assert_eq!(commands[1].raw_command(), "cmake ..");
        assert_eq!(commands[1].cwd.as_deref(), Some(config.build_dir().as_path()));
        assert_eq!(commands[2].raw_command(), "make");
        assert!(config.build_dir().is_dir());
    }

    #[tokio::test]
    async fn test_pull_when_present() {
        let home = tempfile::tempdir().unwrap();
        let config = Config::for_home(home.path());
        std::fs::create_dir_all(&config.install_dir).unwrap();
        let system = Recorder {
            fail_program: Some("git"),
            ..Default::default()
        };

        fetch_and_build(&system, &config, &noop).await.unwrap();

        assert_eq!(system.raw(), vec!["git pull", "cmake ..", "make"]);
        let commands = system.commands.lock().unwrap();
        assert_eq!(commands[0].cwd.as_deref(), Some(config.install_dir.as_path()));
    }

    #[tokio::test]
    async fn test_failed_clone_aborts() {
        let home = tempfile::tempdir().unwrap();
        let config = Config::for_home(home.path());
        let system = Recorder {
            fail_program: Some("git"),
            ..Default::default()
        };

        let result = fetch_and_build(&system, &config, &noop).await;
        assert!(matches!(result, Err(BootstrapError::CommandFailed { .. })));
        assert_eq!(system.commands.lock().unwrap().len(), 1);
        assert!(!config.build_dir().exists());
    }

    #[tokio::test]
    async fn test_failed_configure_skips_make() {
        let home = tempfile::tempdir().unwrap();
        let config = Config::for_home(home.path());
        let system = Recorder {
            fail_program: Some("cmake"),
            ..Default::default()
        };

        let result = fetch_and_build(&system, &config, &noop).await;
        match result {
            Err(BootstrapError::CommandFailed { command, .. }) => assert_eq!(command, "cmake .."),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!system.raw().contains(&"make".to_string()));
    }

    #[tokio::test]
    async fn test_run_binary_ignores_exit_status() {
        let config = Config::for_home("/nonexistent-home");
        let system = Recorder {
            fail_program: Some("/nonexistent-home/apps/fastfetch/build/fastfetch"),
            ..Default::default()
        };

        run_binary(&system, &config, &noop).await.unwrap();
        assert_eq!(
            system.raw(),
            vec!["/nonexistent-home/apps/fastfetch/build/fastfetch"]
        );
    }

    #[tokio::test]
    async fn test_progress_order_for_clone() {
        let home = tempfile::tempdir().unwrap();
        let config = Config::for_home(home.path());
        let system = Recorder::default();
        let stages = Mutex::new(Vec::new());

        fetch_and_build(&system, &config, &|p: Progress| stages.lock().unwrap().push(p))
            .await
            .unwrap();

        assert_eq!(
            *stages.lock().unwrap(),
            vec![Progress::Fetching, Progress::Cloning, Progress::Building]
        );
    }
}
