//! Init command - Write a default build descriptor file.

use crate::build::BuildDescriptor;
use crate::cli::args::InitArgs;
use crate::errors::{AppError, AppResult};

/// Execute the init command
pub fn execute(args: InitArgs) -> AppResult<()> {
    if args.path.exists() && !args.force {
        return Err(AppError::validation(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    tracing::info!("Writing default descriptor to {}", args.path.display());

    let descriptor = BuildDescriptor::default();
    descriptor.write_to(&args.path)?;

    println!("Created: {}", args.path.display());

    Ok(())
}
