//! Task catalog: the ordered, static list of install tasks
//!
//! Catalog order is a correctness-relevant dependency ordering chosen by the
//! catalog author (a language runtime precedes the tasks that install through
//! its package manager). Tasks are constructed once at load time and never
//! mutated.
//!
//! Probes and strategies are tagged variants, so a new probe or strategy kind
//! is added by extending the enum, and a new distribution is a data change in
//! the per-manager package map, not new branching logic.

pub mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigupError};
use crate::host::PackageManager;

/// How to decide a task is already satisfied
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProbeKind {
    /// A binary of this name resolves on PATH
    Executable { name: String },
    /// A filesystem path exists (`~` expands against the run's home)
    Directory { path: String },
    /// The detected package manager reports the package installed
    Package { name: String },
    /// The language runtime reports the module present (query argv exits 0)
    LanguageModule { runtime: String, query: Vec<String> },
}

impl ProbeKind {
    /// Short human description for `rigup list`
    pub fn describe(&self) -> String {
        match self {
            ProbeKind::Executable { name } => format!("executable `{}` on PATH", name),
            ProbeKind::Directory { path } => format!("directory {} exists", path),
            ProbeKind::Package { name } => format!("package `{}` installed", name),
            ProbeKind::LanguageModule { runtime, .. } => {
                format!("module reported by `{}`", runtime)
            }
        }
    }
}

/// How to install a task that the probe found missing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Strategy {
    /// Install through the native package manager; the map from manager to
    /// package list is the whole distribution story for a task
    PackageManager {
        packages: BTreeMap<PackageManager, Vec<String>>,
    },
    /// Download an installer script and pipe it through sh, inside a
    /// task-local scratch directory
    ShellPipeInstall {
        url: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Clone a repository, run a build command in the checkout, copy the
    /// artifact into a PATH directory (created if absent)
    SourceBuild {
        repo: String,
        build: Vec<String>,
        artifact: String,
        dest: String,
    },
    /// Install via an already-installed language runtime's own installer
    LanguageEcosystem {
        runtime: String,
        install: Vec<String>,
    },
}

impl Strategy {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Strategy::PackageManager { .. } => "package-manager",
            Strategy::ShellPipeInstall { .. } => "shell-pipe-install",
            Strategy::SourceBuild { .. } => "source-build",
            Strategy::LanguageEcosystem { .. } => "language-ecosystem",
        }
    }
}

/// A line that must exist in a shell startup file after a successful install
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathAddition {
    /// Rc file path; `~` expands against the run's home
    pub rc_file: String,
    /// Exact line to ensure (verbatim membership, see the rcfile module)
    pub line: String,
}

/// One named install task, bound to a probe and a strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallTask {
    pub name: String,
    pub probe: ProbeKind,
    pub strategy: Strategy,
    #[serde(default)]
    pub path_additions: Vec<PathAddition>,
}

/// The ordered task catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub tasks: Vec<InstallTask>,
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RigupError::CatalogNotFound {
                    path: path.display().to_string(),
                }
            } else {
                RigupError::CatalogParseFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let catalog: Catalog =
            serde_yaml::from_str(&content).map_err(|e| RigupError::CatalogParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// The builtin catalog
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Subset the catalog to the given task names, preserving catalog order.
    /// An unknown name is a load error, not a silent empty run.
    pub fn subset(&self, names: &[String]) -> Result<Self> {
        let known: HashSet<&str> = self.tasks.iter().map(|t| t.name.as_str()).collect();
        for name in names {
            if !known.contains(name.as_str()) {
                return Err(RigupError::UnknownTask { name: name.clone() });
            }
        }

        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        Ok(Catalog {
            tasks: self
                .tasks
                .iter()
                .filter(|t| wanted.contains(t.name.as_str()))
                .cloned()
                .collect(),
        })
    }

    /// Structural checks beyond what serde enforces
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.name.trim().is_empty() {
                return Err(RigupError::CatalogInvalid {
                    message: "task with empty name".to_string(),
                });
            }
            if !seen.insert(task.name.as_str()) {
                return Err(RigupError::CatalogInvalid {
                    message: format!("duplicate task name: {}", task.name),
                });
            }
            match &task.strategy {
                Strategy::SourceBuild { build, .. } if build.is_empty() => {
                    return Err(RigupError::CatalogInvalid {
                        message: format!("task {}: empty build command", task.name),
                    });
                }
                Strategy::LanguageEcosystem { install, .. } if install.is_empty() => {
                    return Err(RigupError::CatalogInvalid {
                        message: format!("task {}: empty install command", task.name),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
