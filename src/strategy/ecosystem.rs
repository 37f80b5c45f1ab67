//! Language-ecosystem installs (npm/pip/cargo/gem and friends)
//!
//! The runtime's own package installer does the work. An absent runtime is a
//! skip, not a failure: catalog order puts runtime tasks first, so on a
//! healthy run the runtime exists by the time its tools come up.

use std::process::Command;

use crate::probe;
use crate::report::TaskStatus;

pub fn execute(runtime: &str, install: &[String], verbose: bool) -> TaskStatus {
    if !probe::executable_on_path(runtime) {
        return TaskStatus::Skipped("runtime not installed".to_string());
    }

    let mut cmd = Command::new(runtime);
    cmd.args(install);

    match super::run_captured(&mut cmd, verbose) {
        Ok(()) => TaskStatus::Installed,
        Err(tail) => TaskStatus::Failed(tail),
    }
}
