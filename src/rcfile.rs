//! Shell rc file mutation
//!
//! Every PATH export or init hook a task needs goes through [`ensure_line`],
//! the one place that guarantees the dedup invariant: a line already present
//! verbatim is never appended again, so re-running the whole orchestrator
//! leaves rc files byte-for-byte unchanged.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// What `ensure_line` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Line was already present; file untouched
    AlreadyPresent,
    /// Line appended at end-of-file
    Appended,
    /// File missing and not eligible for auto-creation; nothing written
    FileMissing,
}

/// Append `line` to the rc file at `path` unless an identical line exists.
///
/// The file is treated as an unordered set of lines for the membership check,
/// but new lines are only ever appended, preserving the append-log order of
/// existing content. Only the default interactive rc is auto-created
/// (`auto_create`); other rc files that do not exist are left alone.
///
/// The file handle is scoped so it is closed on every exit path, including
/// write failures, which the caller records as a degraded mutation rather
/// than aborting the run.
pub fn ensure_line(path: &Path, line: &str, auto_create: bool) -> io::Result<EnsureOutcome> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if !auto_create {
                return Ok(EnsureOutcome::FileMissing);
            }
            String::new()
        }
        Err(e) => return Err(e),
    };

    if existing.lines().any(|l| l == line) {
        return Ok(EnsureOutcome::AlreadyPresent);
    }

    {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // Repair a missing trailing newline so the append never glues onto
        // the last existing line.
        if !existing.is_empty() && !existing.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }

    Ok(EnsureOutcome::Appended)
}
