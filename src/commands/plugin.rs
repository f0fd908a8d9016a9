use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::Config;

/// List plugin references in order
pub fn list_command(config_path: Option<&Path>) -> Result<()> {
    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    for plugin in &config.plugins {
        println!("{}", plugin);
    }
    Ok(())
}

/// Add a plugin reference
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
/// * `name` - Package name, e.g. '@tailwindcss/typography'
///
/// # Returns
/// * `Ok(())` - Plugin added and saved
/// * `Err(anyhow::Error)` - Duplicate or configuration error
pub fn add_command(config_path: Option<&Path>, name: String) -> Result<()> {
    info!("Adding plugin: {}", name);

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.add_plugin(name.clone())?;
    config.save(&path)?;

    println!("Added plugin '{}'", name);
    Ok(())
}

/// Remove a plugin reference
pub fn remove_command(config_path: Option<&Path>, name: &str) -> Result<()> {
    info!("Removing plugin: {}", name);

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.remove_plugin(name)?;
    config.save(&path)?;

    println!("Removed plugin '{}'", name);
    Ok(())
}
