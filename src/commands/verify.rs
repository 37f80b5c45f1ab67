//! Verify command implementation
//!
//! Independent re-probe of the catalog: reports ground truth regardless of
//! what any earlier run claimed. Read-only, so no root precondition applies.

use console::Style;

use crate::cli::VerifyArgs;
use crate::error::Result;
use crate::host::HostEnvironment;
use crate::verify;

pub fn run(home: Option<std::path::PathBuf>, verbose: bool, args: VerifyArgs) -> Result<()> {
    let env = HostEnvironment::detect(home)?;
    let catalog = super::load_catalog(args.catalog.as_ref(), &args.only)?;

    let report = verify::verify(&env, &catalog);

    for entry in &report.entries {
        if entry.present {
            println!("{} {}", Style::new().green().apply_to("pass"), entry.name);
        } else {
            println!("{} {}", Style::new().red().apply_to("FAIL"), entry.name);
        }
    }

    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Verification:"),
        report.summary()
    );

    if let Some(path) = &args.report {
        report.write_json(path)?;
        if verbose {
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
