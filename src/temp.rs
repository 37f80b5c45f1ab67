//! Task-local scratch directories for downloads and source builds.
//!
//! Every task gets its own disposable directory so leftover artifacts from a
//! failed build can never interfere with a later task. The base is always an
//! absolute path, so scratch dirs are never created under the current working
//! directory (e.g. when TMPDIR=tmp and cwd is a repo).

use std::env;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// Returns an absolute directory path suitable for creating scratch dirs.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a scratch directory for a single task. Removed on drop.
pub fn scratch_dir(task_name: &str) -> io::Result<TempDir> {
    let slug: String = task_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    tempfile::Builder::new()
        .prefix(&format!("rigup-{}-", slug))
        .tempdir_in(temp_dir_base())
}
