//! Native package manager installs
//!
//! The install command per manager is a lookup, not a branch chain; adding a
//! distribution means adding a row here and a package list in the catalog.
//! Re-running an install for an already-installed package is a no-op for all
//! supported managers, which keeps the strategy re-entrant-safe.

use std::process::Command;

use std::collections::BTreeMap;

use crate::host::{HostEnvironment, PackageManager};
use crate::report::TaskStatus;

/// `sudo` argv prefix per manager
fn install_argv(pm: PackageManager) -> Option<&'static [&'static str]> {
    match pm {
        PackageManager::Apt => Some(&["apt-get", "install", "-y"]),
        PackageManager::Pacman => Some(&["pacman", "-S", "--noconfirm", "--needed"]),
        PackageManager::Dnf => Some(&["dnf", "install", "-y"]),
        PackageManager::Unknown => None,
    }
}

pub fn execute(
    env: &HostEnvironment,
    packages: &BTreeMap<PackageManager, Vec<String>>,
    verbose: bool,
) -> TaskStatus {
    let Some(argv) = install_argv(env.package_manager) else {
        return TaskStatus::Skipped("unsupported package manager".to_string());
    };

    let Some(names) = packages.get(&env.package_manager) else {
        return TaskStatus::Skipped(format!(
            "no {} package mapping",
            env.package_manager
        ));
    };

    let mut cmd = Command::new("sudo");
    // sudo's env_reset strips inherited variables, so the noninteractive
    // frontend has to travel inside the escalated command line
    if env.package_manager == PackageManager::Apt {
        cmd.args(["env", "DEBIAN_FRONTEND=noninteractive"]);
    }
    cmd.args(argv).args(names);

    match super::run_captured(&mut cmd, verbose) {
        Ok(()) => TaskStatus::Installed,
        Err(tail) => TaskStatus::Failed(tail),
    }
}
