//! Error types and handling for rigup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only fatal conditions are modeled here. Per-task install failures are data
//! (`TaskStatus::Failed`/`Skipped` in the run report), never errors: a single
//! task must not be able to abort the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rigup operations
#[derive(Error, Diagnostic, Debug)]
pub enum RigupError {
    #[error("Refusing to run as root")]
    #[diagnostic(
        code(rigup::host::running_as_root),
        help("Run rigup as a regular user; it escalates through sudo only where a package manager requires it")
    )]
    RunningAsRoot,

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(rigup::host::home_not_found),
        help("Set HOME or pass --home <dir>")
    )]
    HomeNotFound,

    // Catalog errors
    #[error("Catalog file not found: {path}")]
    #[diagnostic(code(rigup::catalog::not_found))]
    CatalogNotFound { path: String },

    #[error("Failed to parse catalog file: {path}")]
    #[diagnostic(
        code(rigup::catalog::parse_failed),
        help("Catalogs are YAML with a top-level `tasks` list; see `rigup list` for the builtin shape")
    )]
    CatalogParseFailed { path: String, reason: String },

    #[error("Invalid catalog: {message}")]
    #[diagnostic(code(rigup::catalog::invalid))]
    CatalogInvalid { message: String },

    #[error("Unknown task name: {name}")]
    #[diagnostic(
        code(rigup::catalog::unknown_task),
        help("Use 'rigup list' to see the task names in the active catalog")
    )]
    UnknownTask { name: String },

    // Report errors
    #[error("Failed to write report to {path}")]
    #[diagnostic(code(rigup::report::write_failed))]
    ReportWriteFailed { path: String, reason: String },
}

/// Result type alias for rigup operations
pub type Result<T> = std::result::Result<T, RigupError>;
