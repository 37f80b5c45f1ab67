//! The sequential install orchestrator
//!
//! Per task: `Pending -> Probing -> {AlreadyPresent | Installing ->
//! {Installed | Failed}}`, then rc updates only on `Installed`. Tasks run in
//! strict catalog order, one at a time; nothing a task does can halt the run.

use console::Style;

use crate::catalog::{Catalog, InstallTask};
use crate::host::HostEnvironment;
use crate::probe;
use crate::progress::ProgressDisplay;
use crate::rcfile::{self, EnsureOutcome};
use crate::report::{InstallResult, RunReport, TaskStatus};
use crate::strategy;

pub struct Orchestrator<'a> {
    env: &'a HostEnvironment,
    dry_run: bool,
    verbose: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(env: &'a HostEnvironment, dry_run: bool, verbose: bool) -> Self {
        Self {
            env,
            dry_run,
            verbose,
        }
    }

    /// Run every catalog task and return the accumulated report.
    ///
    /// The root precondition is checked by the command layer before this is
    /// ever constructed; from here on nothing is fatal.
    pub fn run(&self, catalog: &Catalog) -> RunReport {
        let progress = ProgressDisplay::new(catalog.tasks.len() as u64);
        let mut report = RunReport::default();

        for task in &catalog.tasks {
            progress.update_task(&task.name);
            let result = self.run_task(task);
            // Task lines go to stdout; the bar lives on stderr and hides
            // itself when stderr is not a terminal
            println!("{}", format_result_line(&result));
            progress.inc_task();
            report.push(result);
        }

        progress.finish();
        report
    }

    fn run_task(&self, task: &InstallTask) -> InstallResult {
        if probe::is_installed(self.env, task) {
            return InstallResult::new(task.name.clone(), TaskStatus::AlreadyPresent);
        }

        if self.dry_run {
            return InstallResult::new(task.name.clone(), TaskStatus::Planned);
        }

        let status = strategy::execute(self.env, task, self.verbose);
        let mut result = InstallResult::new(task.name.clone(), status);

        // Rc updates happen only after a successful install; a failed rc
        // write degrades the result note but the tool stays Installed.
        if result.status == TaskStatus::Installed {
            result.notes = self.apply_path_additions(task);
        }

        result
    }

    fn apply_path_additions(&self, task: &InstallTask) -> Vec<String> {
        let mut notes = Vec::new();

        for addition in &task.path_additions {
            let rc_path = self.env.resolve(&addition.rc_file);
            let auto_create = self.env.is_default_rc(&rc_path);
            match rcfile::ensure_line(&rc_path, &addition.line, auto_create) {
                Ok(EnsureOutcome::Appended) | Ok(EnsureOutcome::AlreadyPresent) => {}
                Ok(EnsureOutcome::FileMissing) => {
                    notes.push(format!(
                        "rc update skipped: {} does not exist",
                        rc_path.display()
                    ));
                }
                Err(e) => {
                    notes.push(format!(
                        "rc update failed for {}: {}",
                        rc_path.display(),
                        e
                    ));
                }
            }
        }

        notes
    }
}

/// One styled line per task
fn format_result_line(result: &InstallResult) -> String {
    let line = match &result.status {
        TaskStatus::AlreadyPresent => format!(
            "{} {} already present",
            Style::new().green().apply_to("✓"),
            result.name
        ),
        TaskStatus::Installed => format!(
            "{} {} installed",
            Style::new().green().bold().apply_to("+"),
            result.name
        ),
        TaskStatus::Planned => format!(
            "{} {} would install",
            Style::new().cyan().apply_to("→"),
            result.name
        ),
        TaskStatus::Skipped(reason) => format!(
            "{} {} skipped ({})",
            Style::new().yellow().apply_to("-"),
            result.name,
            reason
        ),
        TaskStatus::Failed(detail) => format!(
            "{} {} failed: {}",
            Style::new().red().bold().apply_to("✗"),
            result.name,
            detail
        ),
    };

    if result.notes.is_empty() {
        line
    } else {
        format!("{}\n    {}", line, result.notes.join("\n    "))
    }
}
