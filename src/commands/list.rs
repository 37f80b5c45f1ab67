//! List command implementation

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;

pub fn run(args: ListArgs) -> Result<()> {
    let catalog = super::load_catalog(args.catalog.as_ref(), &[])?;

    for task in &catalog.tasks {
        println!(
            "{} [{}]",
            Style::new().bold().yellow().apply_to(&task.name),
            task.strategy.kind_label()
        );
        if args.detailed {
            println!("    probe: {}", task.probe.describe());
            for addition in &task.path_additions {
                println!("    rc: {} <- {}", addition.rc_file, addition.line);
            }
        }
    }

    println!();
    println!("{} tasks", catalog.tasks.len());

    Ok(())
}
