//! Show command - Print the resolved runtime configuration.

use crate::cli::args::ShowArgs;
use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the show command
pub fn execute(args: ShowArgs) -> AppResult<()> {
    let settings = match args.env_file {
        Some(path) => {
            tracing::info!("Loading environment from {}", path.display());
            Settings::from_env_file(path)
        }
        None => Settings::from_env(),
    };

    println!("{}", serde_json::to_string_pretty(&settings)?);

    Ok(())
}
