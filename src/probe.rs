//! Read-only environment probes
//!
//! Probes decide "already installed" before any strategy runs. They never
//! error: an inability to determine status is treated as not installed, and
//! the strategies themselves are re-entrant-safe, so a false negative costs a
//! redundant (no-op) install, never a broken run.

use std::process::{Command, Stdio};

use crate::catalog::{InstallTask, ProbeKind};
use crate::host::{HostEnvironment, PackageManager};

/// Is this task already satisfied on the host?
pub fn is_installed(env: &HostEnvironment, task: &InstallTask) -> bool {
    match &task.probe {
        ProbeKind::Executable { name } => executable_on_path(name),
        ProbeKind::Directory { path } => env.resolve(path).exists(),
        ProbeKind::Package { name } => package_installed(env.package_manager, name),
        ProbeKind::LanguageModule { runtime, query } => {
            executable_on_path(runtime) && quiet_success(runtime, query)
        }
    }
}

/// True iff a binary of this name resolves on the search path
pub fn executable_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

fn package_installed(pm: PackageManager, name: &str) -> bool {
    let (program, args): (&str, &[&str]) = match pm {
        PackageManager::Apt => ("dpkg", &["-s"]),
        PackageManager::Pacman => ("pacman", &["-Qi"]),
        PackageManager::Dnf => ("rpm", &["-q"]),
        // No manager detected: status is indeterminate
        PackageManager::Unknown => return false,
    };

    let mut query: Vec<&str> = args.to_vec();
    query.push(name);
    quiet_success(program, &query)
}

/// Run a query command with all stdio silenced; spawn failures count as false
fn quiet_success<S: AsRef<std::ffi::OsStr>>(program: &str, args: &[S]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
