//! Installing missing build dependencies through the system package manager.

use crate::install::{run_best_effort, BootstrapError, System};
use crate::Distro;
use tracing::info;

/// Install `missing` with the package manager for `distro`.
///
/// Does nothing when `missing` is empty. For [`Distro::Unknown`] no command
/// is run and [`BootstrapError::UnsupportedDistro`] is returned.
///
/// The package-manager commands run best-effort: a failed index refresh or
/// install is logged and the run carries on to the build.
pub async fn install_dependencies<S: System>(
    system: &S,
    distro: Distro,
    missing: &[String],
) -> Result<(), BootstrapError> {
    if missing.is_empty() {
        return Ok(());
    }

    let commands = distro
        .install_commands(missing)
        .ok_or_else(|| BootstrapError::unsupported_distro(missing))?;

    info!(%distro, packages = %missing.join(" "), "installing dependencies");
    for command in &commands {
        run_best_effort(system, command).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::{CommandStatus, StructuredCommand};
    use std::io;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        exit_code: i32,
        commands: Mutex<Vec<String>>,
    }

    impl System for Recorder {
        fn find_executable(&self, _name: &str) -> Option<PathBuf> {
            None
        }

        async fn run(&self, command: &StructuredCommand) -> io::Result<CommandStatus> {
            self.commands.lock().unwrap().push(command.raw_command());
            Ok(CommandStatus::from_code(self.exit_code))
        }
    }

    fn missing() -> Vec<String> {
        vec!["cmake".to_string(), "gcc".to_string()]
    }

    #[tokio::test]
    async fn test_empty_missing_runs_nothing() {
        let system = Recorder::default();
        install_dependencies(&system, Distro::Unknown, &[]).await.unwrap();
        assert!(system.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_debian_runs_update_then_install() {
        let system = Recorder::default();
        install_dependencies(&system, Distro::Debian, &missing())
            .await
            .unwrap();
        assert_eq!(
            *system.commands.lock().unwrap(),
            vec!["sudo apt update", "sudo apt install -y cmake gcc"]
        );
    }

    #[tokio::test]
    async fn test_arch_and_fedora() {
        let arch = Recorder::default();
        install_dependencies(&arch, Distro::Arch, &missing()).await.unwrap();
        assert_eq!(
            *arch.commands.lock().unwrap(),
            vec!["sudo pacman -Sy --noconfirm cmake gcc"]
        );

        let fedora = Recorder::default();
        install_dependencies(&fedora, Distro::Fedora, &missing())
            .await
            .unwrap();
        assert_eq!(
            *fedora.commands.lock().unwrap(),
            vec!["sudo dnf install -y cmake gcc"]
        );
    }

    #[tokio::test]
    async fn test_unknown_distro_is_fatal_and_runs_nothing() {
        let system = Recorder::default();
        let result = install_dependencies(&system, Distro::Unknown, &missing()).await;
        match result {
            Err(BootstrapError::UnsupportedDistro { missing: m, .. }) => {
                assert_eq!(m, missing());
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(system.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_install_is_ignored() {
        let system = Recorder {
            exit_code: 100,
            ..Default::default()
        };
        install_dependencies(&system, Distro::Debian, &missing())
            .await
            .unwrap();
        assert_eq!(system.commands.lock().unwrap().len(), 2);
    }
}
