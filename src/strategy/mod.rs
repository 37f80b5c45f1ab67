//! Install strategies
//!
//! Four ways to put a tool on the host, one contract: `execute` returns a
//! terminal [`TaskStatus`] and never propagates an error past the task
//! boundary. External installers are opaque subprocesses with an exit code
//! and captured output; non-zero exit becomes `Failed` with an output tail.
//!
//! Strategies never mutate the detected host state.

mod ecosystem;
mod package_manager;
mod shell_pipe;
mod source_build;

use std::process::Command;

use crate::catalog::{InstallTask, Strategy};
use crate::host::HostEnvironment;
use crate::report::TaskStatus;

/// Execute the strategy bound to `task`
pub fn execute(env: &HostEnvironment, task: &InstallTask, verbose: bool) -> TaskStatus {
    match &task.strategy {
        Strategy::PackageManager { packages } => {
            package_manager::execute(env, packages, verbose)
        }
        Strategy::ShellPipeInstall { url, args } => {
            shell_pipe::execute(env, &task.name, url, args, verbose)
        }
        Strategy::SourceBuild {
            repo,
            build,
            artifact,
            dest,
        } => source_build::execute(env, &task.name, repo, build, artifact, dest, verbose),
        Strategy::LanguageEcosystem { runtime, install } => {
            ecosystem::execute(runtime, install, verbose)
        }
    }
}

/// Output tail kept in `Failed` details: enough to diagnose, small enough
/// for a one-screen report
const TAIL_LINES: usize = 12;

/// Run a fully-configured command, capturing output. Spawn failures and
/// non-zero exits both land in `Err(tail)`.
pub(crate) fn run_captured(cmd: &mut Command, verbose: bool) -> std::result::Result<(), String> {
    if verbose {
        eprintln!("  $ {:?}", cmd);
    }

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => return Err(format!("failed to spawn {:?}: {}", cmd.get_program(), e)),
    };

    if verbose && !output.stdout.is_empty() {
        eprintln!("{}", String::from_utf8_lossy(&output.stdout).trim_end());
    }

    if output.status.success() {
        Ok(())
    } else {
        Err(format!(
            "{}: {}",
            output.status,
            output_tail(&output.stdout, &output.stderr)
        ))
    }
}

/// Last few lines of combined output, stderr preferred
pub(crate) fn output_tail(stdout: &[u8], stderr: &[u8]) -> String {
    let source = if stderr.is_empty() { stdout } else { stderr };
    let text = String::from_utf8_lossy(source);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    lines[start..].join("\n").trim().to_string()
}
