//! Builtin task catalog
//!
//! A representative, ordered catalog of developer tools. Order is the
//! dependency order: base packages first, then language runtimes, then the
//! tools installed through those runtimes' own package managers.

use std::collections::BTreeMap;

use super::{Catalog, InstallTask, PathAddition, ProbeKind, Strategy};
use crate::host::PackageManager;

const DEFAULT_RC: &str = "~/.bashrc";
const LOCAL_BIN: &str = "~/.local/bin";

fn pkgs(entries: &[(PackageManager, &[&str])]) -> Strategy {
    let packages: BTreeMap<PackageManager, Vec<String>> = entries
        .iter()
        .map(|(pm, names)| (*pm, names.iter().map(|s| s.to_string()).collect()))
        .collect();
    Strategy::PackageManager { packages }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn exe(name: &str) -> ProbeKind {
    ProbeKind::Executable {
        name: name.to_string(),
    }
}

fn rc_line(line: &str) -> PathAddition {
    PathAddition {
        rc_file: DEFAULT_RC.to_string(),
        line: line.to_string(),
    }
}

/// Build the builtin catalog
pub fn catalog() -> Catalog {
    use PackageManager::{Apt, Dnf, Pacman};

    let tasks = vec![
        InstallTask {
            name: "build-tools".to_string(),
            probe: exe("cc"),
            strategy: pkgs(&[
                (Apt, &["build-essential"]),
                (Pacman, &["base-devel"]),
                (Dnf, &["gcc", "gcc-c++", "make"]),
            ]),
            path_additions: vec![],
        },
        InstallTask {
            name: "git".to_string(),
            probe: exe("git"),
            strategy: pkgs(&[(Apt, &["git"]), (Pacman, &["git"]), (Dnf, &["git"])]),
            path_additions: vec![],
        },
        InstallTask {
            name: "curl".to_string(),
            probe: exe("curl"),
            strategy: pkgs(&[(Apt, &["curl"]), (Pacman, &["curl"]), (Dnf, &["curl"])]),
            path_additions: vec![],
        },
        InstallTask {
            name: "ripgrep".to_string(),
            probe: exe("rg"),
            strategy: pkgs(&[
                (Apt, &["ripgrep"]),
                (Pacman, &["ripgrep"]),
                (Dnf, &["ripgrep"]),
            ]),
            path_additions: vec![],
        },
        InstallTask {
            name: "neovim".to_string(),
            probe: exe("nvim"),
            strategy: pkgs(&[
                (Apt, &["neovim"]),
                (Pacman, &["neovim"]),
                (Dnf, &["neovim"]),
            ]),
            path_additions: vec![],
        },
        // Runtimes before the tools that install through them
        InstallTask {
            name: "rustup".to_string(),
            probe: ProbeKind::Directory {
                path: "~/.cargo".to_string(),
            },
            strategy: Strategy::ShellPipeInstall {
                url: "https://sh.rustup.rs".to_string(),
                args: argv(&["-y", "--no-modify-path"]),
            },
            path_additions: vec![rc_line("export PATH=\"$HOME/.cargo/bin:$PATH\"")],
        },
        InstallTask {
            name: "node".to_string(),
            probe: exe("node"),
            strategy: pkgs(&[
                (Apt, &["nodejs", "npm"]),
                (Pacman, &["nodejs", "npm"]),
                (Dnf, &["nodejs", "npm"]),
            ]),
            path_additions: vec![],
        },
        InstallTask {
            name: "python-pip".to_string(),
            probe: exe("pip3"),
            strategy: pkgs(&[
                (Apt, &["python3-pip"]),
                (Pacman, &["python-pip"]),
                (Dnf, &["python3-pip"]),
            ]),
            path_additions: vec![rc_line("export PATH=\"$HOME/.local/bin:$PATH\"")],
        },
        InstallTask {
            name: "docker".to_string(),
            probe: exe("docker"),
            strategy: Strategy::ShellPipeInstall {
                url: "https://get.docker.com".to_string(),
                args: vec![],
            },
            path_additions: vec![],
        },
        InstallTask {
            name: "starship".to_string(),
            probe: exe("starship"),
            strategy: Strategy::ShellPipeInstall {
                url: "https://starship.rs/install.sh".to_string(),
                args: argv(&["-y", "-b", "~/.local/bin"]),
            },
            path_additions: vec![rc_line("eval \"$(starship init bash)\"")],
        },
        InstallTask {
            name: "fzf".to_string(),
            probe: exe("fzf"),
            strategy: Strategy::SourceBuild {
                repo: "https://github.com/junegunn/fzf.git".to_string(),
                build: argv(&["make", "bin/fzf"]),
                artifact: "bin/fzf".to_string(),
                dest: LOCAL_BIN.to_string(),
            },
            path_additions: vec![],
        },
        // Language-ecosystem tools; skipped cleanly when the runtime is absent
        InstallTask {
            name: "typescript".to_string(),
            probe: exe("tsc"),
            strategy: Strategy::LanguageEcosystem {
                runtime: "npm".to_string(),
                install: argv(&["install", "-g", "typescript"]),
            },
            path_additions: vec![],
        },
        InstallTask {
            name: "httpie".to_string(),
            probe: exe("http"),
            strategy: Strategy::LanguageEcosystem {
                runtime: "pip3".to_string(),
                install: argv(&["install", "--user", "httpie"]),
            },
            path_additions: vec![],
        },
        InstallTask {
            name: "python-requests".to_string(),
            probe: ProbeKind::LanguageModule {
                runtime: "python3".to_string(),
                query: argv(&["-c", "import requests"]),
            },
            strategy: Strategy::LanguageEcosystem {
                runtime: "pip3".to_string(),
                install: argv(&["install", "--user", "requests"]),
            },
            path_additions: vec![],
        },
        InstallTask {
            name: "cargo-watch".to_string(),
            probe: exe("cargo-watch"),
            strategy: Strategy::LanguageEcosystem {
                runtime: "cargo".to_string(),
                install: argv(&["install", "cargo-watch"]),
            },
            path_additions: vec![],
        },
        InstallTask {
            name: "bundler".to_string(),
            probe: exe("bundle"),
            strategy: Strategy::LanguageEcosystem {
                runtime: "gem".to_string(),
                install: argv(&["install", "--user-install", "bundler"]),
            },
            path_additions: vec![],
        },
    ];

    Catalog { tasks }
}
