//! Validate command - Check a build descriptor file.

use crate::build::BuildDescriptor;
use crate::cli::args::ValidateArgs;
use crate::errors::AppResult;

/// Execute the validate command
pub fn execute(args: ValidateArgs) -> AppResult<()> {
    tracing::info!("Validating descriptor: {}", args.path.display());

    let descriptor = BuildDescriptor::from_path(&args.path)?;
    descriptor.validate()?;

    println!("{} is valid", args.path.display());
    println!("  aliases: {}", descriptor.aliases.len());
    println!("  plugins: {}", descriptor.plugins.len());
    println!(
        "  preview hosts: {}",
        descriptor.preview.allowed_hosts.len()
    );
    println!(
        "  chunks: {}",
        descriptor
            .chunks
            .iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
