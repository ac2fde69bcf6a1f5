//! Host inspection.
//!
//! - `find_executable`: executable lookup on `PATH` only
//! - `missing_dependencies`: which required commands are absent
//! - `detect_distro`: distribution family from the OS release file

mod os_release;
mod path_finder;

pub use os_release::{classify_os_release, detect_distro, pretty_name};
pub use path_finder::missing_dependencies;
pub(crate) use path_finder::find_executable;
