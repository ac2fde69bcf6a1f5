//! PATH-based executable lookup.

use crate::install::System;
use std::path::PathBuf;
use tracing::debug;

/// Find an executable by name on the search path.
///
/// Only `PATH` is consulted; tools elsewhere count as missing.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Report which of `dependencies` cannot be resolved, preserving order.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::{missing_dependencies, HostSystem};
///
/// let deps = vec!["definitely_not_a_real_tool_xyz".to_string()];
/// assert_eq!(missing_dependencies(&HostSystem, &deps), deps);
/// ```
pub fn missing_dependencies<S: System>(system: &S, dependencies: &[String]) -> Vec<String> {
    dependencies
        .iter()
        .filter(|name| match system.find_executable(name) {
            Some(path) => {
                debug!(dependency = %name, path = %path.display(), "dependency found");
                false
            }
            None => true,
        })
        .cloned()
        .collect()
}
