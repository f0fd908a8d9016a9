use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::cli::app::InitFormat;
use crate::config::{Config, Format};
use crate::ui::prompts::prompt_overwrite_confirmation;

/// Create a default config file in the current directory
///
/// # Arguments
/// * `format` - Serialization format for the new file
/// * `force` - Skip the overwrite confirmation prompt
///
/// # Returns
/// * `Ok(())` - Config file created (or operation cancelled by the user)
/// * `Err(anyhow::Error)` - Write error
pub fn init_command(format: InitFormat, force: bool) -> Result<()> {
    let format = match format {
        InitFormat::Json => Format::Json,
        InitFormat::Toml => Format::Toml,
    };
    let path = PathBuf::from(format.file_name());

    if path.exists() && !force && !prompt_overwrite_confirmation(format.file_name())? {
        println!("Operation cancelled.");
        return Ok(());
    }

    info!("Initializing config file: {:?}", path);

    let config = Config::default();
    config.save(&path)?;

    println!("Created {}", path.display());
    println!("  darkMode: {}", config.dark_mode);
    println!("  content: {}", config.content.join(", "));
    Ok(())
}
