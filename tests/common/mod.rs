//! Common test utilities for rigup integration tests

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A sandboxed home + stub-executable PATH for driving the real binary.
///
/// Stub executables go first on PATH, so a stubbed `apt-get` forces apt
/// detection and a stubbed `sudo` swallows escalation. Recording stubs append
/// their argv to an invocation log the tests assert against.
#[allow(dead_code)]
pub struct TestHome {
    temp: TempDir,
    pub home: PathBuf,
    pub bin: PathBuf,
    pub log: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let bin = temp.path().join("bin");
        fs::create_dir_all(&home).expect("Failed to create home directory");
        fs::create_dir_all(&bin).expect("Failed to create stub bin directory");
        let log = temp.path().join("invocations.log");
        Self {
            temp,
            home,
            bin,
            log,
        }
    }

    /// Install a stub executable with the given sh body
    pub fn stub(&self, name: &str, body: &str) {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
    }

    /// Stub that records its invocation and succeeds
    pub fn stub_recording(&self, name: &str) {
        self.stub(
            name,
            &format!("echo \"{} $*\" >> '{}'\nexit 0", name, self.log.display()),
        );
    }

    /// Stub that records its invocation and fails
    pub fn stub_failing(&self, name: &str) {
        self.stub(
            name,
            &format!(
                "echo \"{} $*\" >> '{}'\necho 'stub failure' >&2\nexit 1",
                name,
                self.log.display()
            ),
        );
    }

    /// Everything the stubs recorded, in call order
    pub fn invocations(&self) -> String {
        fs::read_to_string(&self.log).unwrap_or_default()
    }

    /// Write a catalog YAML next to the sandbox and return its path
    pub fn write_catalog(&self, yaml: &str) -> PathBuf {
        let path = self.temp.path().join("catalog.yaml");
        fs::write(&path, yaml).expect("Failed to write catalog");
        path
    }

    pub fn write_home_file(&self, rel: &str, content: &str) {
        let path = self.home.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_home_file(&self, rel: &str) -> String {
        fs::read_to_string(self.home.join(rel)).expect("Failed to read file")
    }

    pub fn home_file_exists(&self, rel: &str) -> bool {
        self.home.join(rel).exists()
    }

    /// Path where reports can be written
    pub fn report_path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    /// The rigup binary, pointed at this sandbox
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn rigup(&self) -> Command {
        let mut cmd = Command::cargo_bin("rigup").expect("binary builds");
        cmd.env("HOME", &self.home).env(
            "PATH",
            format!("{}:/usr/bin:/bin", self.bin.display()),
        );
        cmd
    }
}
