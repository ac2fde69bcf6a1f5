//! Installation: package-manager dependencies, source fetch and build, and
//! launching the result.
//!
//! All host interaction goes through the [`System`] trait. Commands are run
//! under one of two policies, see [`run_best_effort`] and
//! [`run_must_succeed`].

mod errors;
mod executor;
mod packages;
mod progress;
mod source;
mod types;

pub use errors::BootstrapError;
pub use executor::{run_best_effort, run_must_succeed, run_with_policy, HostSystem, System};
pub use packages::install_dependencies;
pub use progress::Progress;
pub use source::{fetch_and_build, run_binary};
pub use types::{CommandStatus, FailurePolicy, StructuredCommand};
