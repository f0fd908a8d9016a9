use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::config::Config;

/// List theme extension categories and their override values
pub fn list_command(config_path: Option<&Path>) -> Result<()> {
    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    if config.theme.extend.is_empty() {
        println!("No theme extensions configured.");
        return Ok(());
    }

    for (category, value) in &config.theme.extend {
        println!("{}: {}", category, value);
    }
    Ok(())
}

/// Set the override value for a theme-token category
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
/// * `category` - Theme-token category, e.g. 'colors'
/// * `value` - Override value as a JSON string
///
/// # Returns
/// * `Ok(())` - Extension set and saved
/// * `Err(anyhow::Error)` - Invalid JSON or configuration error
pub fn set_command(config_path: Option<&Path>, category: String, value: &str) -> Result<()> {
    info!("Setting theme extension: {}", category);

    let value: serde_json::Value = serde_json::from_str(value)
        .with_context(|| format!("Invalid JSON value for theme.extend.{}", category))?;

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.set_theme_extension(category.clone(), value);
    config.save(&path)?;

    println!("Set theme.extend.{}", category);
    Ok(())
}

/// Remove a theme-token category override
pub fn unset_command(config_path: Option<&Path>, category: &str) -> Result<()> {
    info!("Unsetting theme extension: {}", category);

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.unset_theme_extension(category)?;
    config.save(&path)?;

    println!("Removed theme.extend.{}", category);
    Ok(())
}
