//! Run report: one result per task, summary counts, optional JSON output
//!
//! The report is the only place per-task failures surface. Nothing in it can
//! change the process exit code; a completed run exits 0 regardless of how
//! many tasks failed.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, RigupError};

/// Terminal state of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Probe was satisfied; strategy never executed
    AlreadyPresent,
    /// Strategy executed and succeeded
    Installed,
    /// Strategy was not applicable (reason attached); not a failure
    Skipped(String),
    /// Strategy executed and failed (captured output tail attached)
    Failed(String),
    /// Dry-run only: the strategy would have executed
    Planned,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::AlreadyPresent => "already-present",
            TaskStatus::Installed => "installed",
            TaskStatus::Skipped(_) => "skipped",
            TaskStatus::Failed(_) => "failed",
            TaskStatus::Planned => "planned",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            TaskStatus::Skipped(reason) => Some(reason),
            TaskStatus::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Outcome of one task, plus any degraded-mutation notes (rc-file writes
/// that failed after a successful install)
#[derive(Debug, Clone)]
pub struct InstallResult {
    pub name: String,
    pub status: TaskStatus,
    pub notes: Vec<String>,
}

impl InstallResult {
    pub fn new(name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            name: name.into(),
            status,
            notes: vec![],
        }
    }
}

/// All results of one orchestrator run, in catalog order
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<InstallResult>,
}

impl RunReport {
    pub fn push(&mut self, result: InstallResult) {
        self.results.push(result);
    }

    pub fn count(&self, label: &str) -> usize {
        self.results
            .iter()
            .filter(|r| r.status.label() == label)
            .count()
    }

    /// One-line summary in catalog terms
    pub fn summary(&self) -> String {
        let base = format!(
            "{} installed, {} already present, {} skipped, {} failed",
            self.count("installed"),
            self.count("already-present"),
            self.count("skipped"),
            self.count("failed"),
        );
        let planned = self.count("planned");
        if planned > 0 {
            format!("{} planned, {}", planned, base)
        } else {
            base
        }
    }

    /// Write the report as JSON (`--report <path>`)
    pub fn write_json(&self, path: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct Entry<'a> {
            name: &'a str,
            status: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            detail: Option<&'a str>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            notes: Vec<String>,
        }

        let entries: Vec<Entry> = self
            .results
            .iter()
            .map(|r| Entry {
                name: &r.name,
                status: r.status.label(),
                detail: r.status.detail(),
                notes: r.notes.clone(),
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).map_err(|e| {
            RigupError::ReportWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        fs::write(path, json + "\n").map_err(|e| RigupError::ReportWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
