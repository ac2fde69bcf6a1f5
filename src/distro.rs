//! Distribution family enum used to pick package-manager syntax.

use crate::install::StructuredCommand;
use serde::{Deserialize, Serialize};

/// Coarse classification of the host's Linux distribution.
///
/// Only used to choose which package manager installs missing build
/// dependencies. `Unknown` covers both an unreadable release file and a
/// release file that matches none of the known identifiers.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::Distro;
///
/// assert_eq!(Distro::Fedora.to_string(), "fedora");
/// assert_eq!(Distro::Debian.package_manager(), Some("apt"));
/// assert!(Distro::Unknown.package_manager().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Distro {
    /// Debian, Ubuntu and derivatives (apt).
    Debian,
    /// Arch Linux and derivatives (pacman).
    Arch,
    /// Fedora (dnf).
    Fedora,
    /// Anything not recognised.
    Unknown,
}

impl Distro {
    /// Name of the package manager used for this family.
    pub fn package_manager(&self) -> Option<&'static str> {
        match self {
            Self::Debian => Some("apt"),
            Self::Arch => Some("pacman"),
            Self::Fedora => Some("dnf"),
            Self::Unknown => None,
        }
    }

    /// Privileged commands that install `packages`, in execution order.
    ///
    /// Returns `None` for [`Distro::Unknown`]; there is no generic fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auto_fastfetch::Distro;
    ///
    /// let cmds = Distro::Arch.install_commands(&["cmake".to_string()]).unwrap();
    /// assert_eq!(cmds.len(), 1);
    /// assert_eq!(cmds[0].raw_command(), "sudo pacman -Sy --noconfirm cmake");
    /// ```
    pub fn install_commands(&self, packages: &[String]) -> Option<Vec<StructuredCommand>> {
        let privileged = |args: &[&str]| {
            let mut full: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            full.extend(packages.iter().cloned());
            StructuredCommand::new("sudo", full)
        };

        match self {
            Self::Debian => Some(vec![
                StructuredCommand::new("sudo", ["apt", "update"]),
                privileged(&["apt", "install", "-y"]),
            ]),
            Self::Arch => Some(vec![privileged(&["pacman", "-Sy", "--noconfirm"])]),
            Self::Fedora => Some(vec![privileged(&["dnf", "install", "-y"])]),
            Self::Unknown => None,
        }
    }
}
