//! Build-from-source installs
//!
//! Clone into a task-local scratch directory, run the build command in the
//! checkout, then place the artifact into a directory on the user's PATH
//! (created if absent). The scratch checkout is discarded on drop, so a
//! failed build leaves nothing behind for the next run to trip over.

use std::fs;
use std::process::Command;

use git2::build::RepoBuilder;

use crate::host::HostEnvironment;
use crate::report::TaskStatus;
use crate::temp;

pub fn execute(
    env: &HostEnvironment,
    task_name: &str,
    repo: &str,
    build: &[String],
    artifact: &str,
    dest: &str,
    verbose: bool,
) -> TaskStatus {
    let scratch = match temp::scratch_dir(task_name) {
        Ok(dir) => dir,
        Err(e) => return TaskStatus::Failed(format!("failed to create scratch dir: {}", e)),
    };
    let checkout = scratch.path().join("src");

    if verbose {
        eprintln!("  cloning {}", repo);
    }
    if let Err(e) = RepoBuilder::new().clone(repo, &checkout) {
        return TaskStatus::Failed(format!("clone failed: {}", e.message()));
    }

    let (program, args) = match build.split_first() {
        Some(split) => split,
        None => return TaskStatus::Failed("empty build command".to_string()),
    };
    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(&checkout);
    if let Err(tail) = super::run_captured(&mut cmd, verbose) {
        return TaskStatus::Failed(format!("build failed: {}", tail));
    }

    let built = checkout.join(artifact);
    let dest_dir = env.resolve(dest);
    if let Err(e) = fs::create_dir_all(&dest_dir) {
        return TaskStatus::Failed(format!(
            "failed to create {}: {}",
            dest_dir.display(),
            e
        ));
    }

    let file_name = match built.file_name() {
        Some(name) => name.to_owned(),
        None => return TaskStatus::Failed(format!("invalid artifact path: {}", artifact)),
    };
    match fs::copy(&built, dest_dir.join(&file_name)) {
        Ok(_) => TaskStatus::Installed,
        Err(e) => TaskStatus::Failed(format!(
            "failed to place {} into {}: {}",
            built.display(),
            dest_dir.display(),
            e
        )),
    }
}
