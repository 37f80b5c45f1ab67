//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rigup - developer workstation provisioner
///
/// Provision a workstation from an ordered catalog of install tasks,
/// idempotently: tools already present are skipped, failures are contained
/// per task, and shell rc files are never polluted with duplicate lines.
#[derive(Parser, Debug)]
#[command(
    name = "rigup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Idempotent developer workstation provisioner",
    long_about = "rigup provisions a developer workstation from an ordered catalog of install \
                  tasks. Each task is probed before anything runs, installed through the \
                  strategy that fits the host (native package manager, installer script, \
                  source build, or a language runtime's own installer), and any required \
                  shell PATH lines are merged into rc files without duplication.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  rigup run\n    \
                  rigup run --dry-run\n    \
                  rigup run --only rustup,ripgrep --report run.json\n    \
                  rigup verify\n    \
                  rigup list"
)]
pub struct Cli {
    /// Home directory for rc files and install destinations (defaults to $HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable verbose output (subprocess command lines and output)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the install catalog
    Run(RunArgs),

    /// Re-probe every catalog entry and report what is actually present
    Verify(VerifyArgs),

    /// List the tasks in the active catalog
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run the builtin catalog:\n    rigup run\n\n\
                  Probe and plan only, no mutation:\n    rigup run --dry-run\n\n\
                  Run a subset of tasks:\n    rigup run --only rustup,fzf\n\n\
                  Run a custom catalog:\n    rigup run --catalog team.yaml\n\n\
                  Write a machine-readable report:\n    rigup run --report run.json")]
pub struct RunArgs {
    /// Catalog file (YAML). Defaults to the builtin catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Probe and print the plan without installing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Run only the named tasks (comma-separated, catalog order preserved)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Write the run report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Verify the builtin catalog:\n    rigup verify\n\n\
                  Verify a custom catalog:\n    rigup verify --catalog team.yaml\n\n\
                  Write a machine-readable report:\n    rigup verify --report verify.json")]
pub struct VerifyArgs {
    /// Catalog file (YAML). Defaults to the builtin catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Verify only the named tasks (comma-separated)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Write the verification report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Catalog file (YAML). Defaults to the builtin catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Show probes and rc additions per task
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rigup completions --shell bash > ~/.bash_completion.d/rigup\n\n\
                  Generate zsh completions:\n    rigup completions --shell zsh > ~/.zfunc/_rigup\n\n\
                  Generate fish completions:\n    rigup completions --shell fish > ~/.config/fish/completions/rigup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
