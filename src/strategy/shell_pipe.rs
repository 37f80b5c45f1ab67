//! Shell-pipe installers (`curl <url> | sh`)
//!
//! The pipeline runs inside a task-local scratch directory so installer
//! scripts that write into their working directory can never pollute the
//! caller's cwd or a later task's scratch space.

use std::process::Command;

use crate::host::HostEnvironment;
use crate::report::TaskStatus;
use crate::temp;

pub fn execute(
    env: &HostEnvironment,
    task_name: &str,
    url: &str,
    args: &[String],
    verbose: bool,
) -> TaskStatus {
    let scratch = match temp::scratch_dir(task_name) {
        Ok(dir) => dir,
        Err(e) => return TaskStatus::Failed(format!("failed to create scratch dir: {}", e)),
    };

    let mut pipeline = format!("curl -fsSL {} | sh", shell_quote(url));
    if !args.is_empty() {
        // `sh -s --` forwards arguments to the piped script
        pipeline = format!("curl -fsSL {} | sh -s --", shell_quote(url));
        for arg in args {
            pipeline.push(' ');
            pipeline.push_str(&shell_quote(&expand_home(env, arg)));
        }
    }

    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(&pipeline).current_dir(scratch.path());

    match super::run_captured(&mut cmd, verbose) {
        Ok(()) => TaskStatus::Installed,
        Err(tail) => TaskStatus::Failed(tail),
    }
}

/// Single-quote a string for sh, escaping embedded single quotes
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Expand a leading `~` before quoting; the quotes stop the shell from
/// expanding it, and an unexpanded `~` path lands inside the scratch dir
fn expand_home(env: &HostEnvironment, arg: &str) -> String {
    if arg == "~" || arg.starts_with("~/") {
        env.resolve(arg).display().to_string()
    } else {
        arg.to_string()
    }
}
