//! End-to-end run tests using the REAL rigup binary
//!
//! Host package managers and sudo are replaced with recording stub
//! executables, so every test asserts both the user-visible output and which
//! external commands actually ran.

mod common;

use common::TestHome;
use predicates::prelude::*;

const RC_LINE: &str = "export PATH=\"$HOME/.local/bin:$PATH\"";

fn three_task_catalog() -> String {
    format!(
        r#"
tasks:
  - name: task-a
    probe: {{ kind: executable, name: sh }}
    strategy:
      kind: package-manager
      packages:
        apt: [sh]
  - name: task-b
    probe: {{ kind: executable, name: rigup-test-tool-b }}
    strategy:
      kind: package-manager
      packages:
        apt: [tool-b]
    path_additions:
      - rc_file: ~/.bashrc
        line: '{}'
  - name: task-c
    probe: {{ kind: executable, name: rigup-test-tool-c }}
    strategy:
      kind: package-manager
      packages:
        pacman: [tool-c]
"#,
        RC_LINE
    )
}

/// Satisfied, apt-mapped, and unmapped tasks in one catalog:
/// AlreadyPresent, Installed, Skipped; one rc line; exit 0.
#[test]
fn test_three_task_scenario() {
    let home = TestHome::new();
    home.stub_recording("apt-get"); // forces apt detection
    home.stub_recording("sudo");
    let catalog = home.write_catalog(&three_task_catalog());
    let report = home.report_path("run.json");

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("task-a already present"))
        .stdout(predicate::str::contains("task-b installed"))
        .stdout(predicate::str::contains(
            "task-c skipped (no apt package mapping)",
        ))
        .stdout(predicate::str::contains(
            "1 installed, 1 already present, 1 skipped, 0 failed",
        ));

    // Exactly the mapped install ran, through sudo, with the noninteractive
    // frontend on the escalated command line (env_reset would strip it from
    // sudo's own environment)
    let invocations = home.invocations();
    assert!(invocations
        .contains("sudo env DEBIAN_FRONTEND=noninteractive apt-get install -y tool-b"));
    assert!(!invocations.contains("install -y sh"));
    assert!(!invocations.contains("tool-c"));

    // Exactly one rc line appended (default rc auto-created)
    assert_eq!(home.read_home_file(".bashrc"), format!("{}\n", RC_LINE));

    // Report preserves catalog order and statuses
    let json = std::fs::read_to_string(&report).unwrap();
    let already = json.find("already-present").unwrap();
    let installed = json.find("\"installed\"").unwrap();
    let skipped = json.find("\"skipped\"").unwrap();
    assert!(already < installed && installed < skipped, "bad order: {}", json);
}

/// Probe true means the strategy is never invoked: zero external calls.
#[test]
fn test_satisfied_probe_spawns_nothing() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    home.stub_recording("sudo");
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: shell
    probe: { kind: executable, name: sh }
    strategy:
      kind: package-manager
      packages:
        apt: [sh]
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("shell already present"));

    assert_eq!(home.invocations(), "");
}

/// A failing task mid-catalog never halts the run, and the run still exits 0.
#[test]
fn test_failure_is_contained_and_exit_zero() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    home.stub_recording("sudo");
    home.stub_failing("rigup-broken-runtime");
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: breaks
    probe: { kind: executable, name: rigup-test-missing-1 }
    strategy:
      kind: language-ecosystem
      runtime: rigup-broken-runtime
      install: [install, thing]
  - name: after
    probe: { kind: executable, name: rigup-test-missing-2 }
    strategy:
      kind: package-manager
      packages:
        apt: [after-tool]
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("breaks failed"))
        .stdout(predicate::str::contains("stub failure"))
        .stdout(predicate::str::contains("after installed"))
        .stdout(predicate::str::contains("1 failed"));

    assert!(home
        .invocations()
        .contains("sudo env DEBIAN_FRONTEND=noninteractive apt-get install -y after-tool"));
}

/// Running the whole catalog twice leaves the rc file byte-for-byte identical.
#[test]
fn test_second_run_appends_no_duplicate_rc_lines() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    home.stub_recording("sudo");
    home.write_home_file(".bashrc", "alias ll='ls -l'\n");
    let catalog = home.write_catalog(&three_task_catalog());

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success();
    let after_first = home.read_home_file(".bashrc");
    assert_eq!(after_first, format!("alias ll='ls -l'\n{}\n", RC_LINE));

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success();
    assert_eq!(home.read_home_file(".bashrc"), after_first);
}

/// Ecosystem tasks skip cleanly when the runtime is absent.
#[test]
fn test_missing_runtime_skips() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: gem-tool
    probe: { kind: executable, name: rigup-test-missing }
    strategy:
      kind: language-ecosystem
      runtime: rigup-absent-gem
      install: [install, some-tool]
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "gem-tool skipped (runtime not installed)",
        ));
}

/// Shell-pipe installers execute the downloaded script through sh.
#[test]
fn test_shell_pipe_install_runs_piped_script() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    // Stub curl emits a script; the pipeline executes it
    home.stub(
        "curl",
        "echo 'touch \"$HOME/pipe-ran\"'",
    );
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: piped-tool
    probe: { kind: executable, name: rigup-test-missing }
    strategy:
      kind: shell-pipe-install
      url: https://example.invalid/install.sh
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("piped-tool installed"));

    assert!(home.home_file_exists("pipe-ran"));
}

/// Args like `-b ~/.local/bin` must reach the piped script with `~` already
/// expanded; quoting stops the shell from expanding it, and an unexpanded
/// path would land inside the throwaway scratch dir.
#[test]
fn test_shell_pipe_args_expand_home() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    // Stub curl emits a script that records the args it was handed
    home.stub("curl", "echo 'printf \"%s\\n\" \"$@\" > \"$HOME/script-args\"'");
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: prompt
    probe: { kind: executable, name: rigup-test-missing }
    strategy:
      kind: shell-pipe-install
      url: https://example.invalid/install.sh
      args: ["-y", "-b", "~/.local/bin"]
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt installed"));

    let args = home.read_home_file("script-args");
    assert!(
        args.contains(&format!("{}/.local/bin", home.home.display())),
        "home not expanded: {}",
        args
    );
    assert!(!args.contains('~'), "literal tilde reached the script: {}", args);
}

/// Non-default rc files are not auto-created; the install still counts.
#[test]
fn test_non_default_rc_not_created() {
    let home = TestHome::new();
    home.stub_recording("apt-get");
    home.stub_recording("sudo");
    let catalog = home.write_catalog(
        r#"
tasks:
  - name: tool
    probe: { kind: executable, name: rigup-test-missing }
    strategy:
      kind: package-manager
      packages:
        apt: [tool]
    path_additions:
      - rc_file: ~/.zshrc
        line: 'path+=$HOME/.local/bin'
"#,
    );

    home.rigup()
        .args(["run", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("tool installed"))
        .stdout(predicate::str::contains("rc update skipped"));

    assert!(!home.home_file_exists(".zshrc"));
}
