//! Post-run verification
//!
//! Re-probes every catalog task independently of what the run report said,
//! so "installer claimed success" and "tool is actually present" can be told
//! apart. Purely observational: no side effects, and a failing tool does not
//! change the exit code.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Result, RigupError};
use crate::host::HostEnvironment;
use crate::probe;

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEntry {
    pub name: String,
    pub present: bool,
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub entries: Vec<VerifyEntry>,
}

impl VerifyReport {
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.passed()
    }

    pub fn summary(&self) -> String {
        format!("{} present, {} missing", self.passed(), self.failed())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| {
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

/// Re-probe every catalog task
pub fn verify(env: &HostEnvironment, catalog: &Catalog) -> VerifyReport {
    VerifyReport {
        entries: catalog
            .tasks
            .iter()
            .map(|task| VerifyEntry {
                name: task.name.clone(),
                present: probe::is_installed(env, task),
            })
            .collect(),
    }
}
