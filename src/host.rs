//! Host environment detection
//!
//! Detects the native package manager once at startup and carries the home
//! directory used for rc files and install destinations. The detected state
//! is immutable for the remainder of the run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigupError};

/// Native package managers rigup knows how to drive.
///
/// Detection walks this set in a fixed priority order and returns the first
/// manager whose control binary resolves on PATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Apt,
    Pacman,
    Dnf,
    Unknown,
}

impl PackageManager {
    /// The binary whose presence identifies this manager
    pub fn control_binary(&self) -> Option<&'static str> {
        match self {
            PackageManager::Apt => Some("apt-get"),
            PackageManager::Pacman => Some("pacman"),
            PackageManager::Dnf => Some("dnf"),
            PackageManager::Unknown => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Apt => "apt",
            PackageManager::Pacman => "pacman",
            PackageManager::Dnf => "dnf",
            PackageManager::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Fixed detection priority. Order matters on hosts that carry more than one
/// manager (e.g. dnf alongside a foreign apt).
const DETECTION_ORDER: [PackageManager; 3] = [
    PackageManager::Apt,
    PackageManager::Pacman,
    PackageManager::Dnf,
];

/// Detect the native package manager by its control binary. Never fails;
/// hosts without a supported manager get `Unknown` and callers fall back to
/// skipping package installs.
pub fn detect_package_manager() -> PackageManager {
    for pm in DETECTION_ORDER {
        if let Some(binary) = pm.control_binary() {
            if which::which(binary).is_ok() {
                return pm;
            }
        }
    }
    PackageManager::Unknown
}

/// Abort if the effective UID is root.
///
/// This is the single fatal precondition of the whole run: installers are
/// driven as a regular user and escalate through sudo themselves.
pub fn ensure_not_root() -> Result<()> {
    if nix::unistd::Uid::effective().is_root() {
        return Err(RigupError::RunningAsRoot);
    }
    Ok(())
}

/// Immutable host state for one run
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    pub package_manager: PackageManager,
    pub home: PathBuf,
}

impl HostEnvironment {
    /// Detect the host environment. `home_override` (from `--home`) wins over
    /// the process home directory.
    pub fn detect(home_override: Option<PathBuf>) -> Result<Self> {
        let home = home_override
            .or_else(dirs::home_dir)
            .ok_or(RigupError::HomeNotFound)?;
        Ok(Self {
            package_manager: detect_package_manager(),
            home,
        })
    }

    /// Expand a leading `~` against this environment's home directory
    pub fn resolve(&self, path: &str) -> PathBuf {
        if path == "~" {
            return self.home.clone();
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return self.home.join(rest);
        }
        PathBuf::from(path)
    }

    /// The default interactive-shell rc file. This is the only rc file that
    /// is auto-created when missing.
    pub fn default_rc(&self) -> PathBuf {
        self.home.join(".bashrc")
    }

    pub fn is_default_rc(&self, path: &Path) -> bool {
        path == self.default_rc()
    }
}
