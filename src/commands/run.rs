//! Run command implementation
//!
//! The whole run:
//! 1. Refuse to run as root (the only fatal precondition)
//! 2. Detect the host package manager, once
//! 3. Load the catalog (builtin or --catalog), apply --only
//! 4. Drive the orchestrator over every task in catalog order
//! 5. Print the summary; optionally write the JSON report
//!
//! Individual task failures are reported, never fatal: a completed run exits
//! 0 regardless of how many tasks failed.

use console::Style;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::host::{self, HostEnvironment};
use crate::orchestrator::Orchestrator;

pub fn run(home: Option<std::path::PathBuf>, verbose: bool, args: RunArgs) -> Result<()> {
    host::ensure_not_root()?;

    let env = HostEnvironment::detect(home)?;
    let catalog = super::load_catalog(args.catalog.as_ref(), &args.only)?;

    let heading = if args.dry_run {
        "Planning (dry run)"
    } else {
        "Provisioning"
    };
    println!(
        "{} {} tasks (package manager: {})",
        Style::new().bold().apply_to(heading),
        catalog.tasks.len(),
        env.package_manager
    );

    let report = Orchestrator::new(&env, args.dry_run, verbose).run(&catalog);

    println!();
    println!("{} {}", Style::new().bold().apply_to("Summary:"), report.summary());

    if let Some(path) = &args.report {
        report.write_json(path)?;
        if verbose {
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
