//! Command implementations
//!
//! Thin layer between the CLI surface and the orchestration modules.

pub mod completions;
pub mod list;
pub mod run;
pub mod verify;
pub mod version;

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;

/// Load the catalog named on the command line, or the builtin one
pub(crate) fn load_catalog(path: Option<&PathBuf>, only: &[String]) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    if only.is_empty() {
        Ok(catalog)
    } else {
        catalog.subset(only)
    }
}
