use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::Config;

/// Show the whole configuration record
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
///
/// # Returns
/// * `Ok(())` - Record displayed successfully
/// * `Err(anyhow::Error)` - Discovery, read, or parse error
pub fn show_command(config_path: Option<&Path>) -> Result<()> {
    info!("Showing configuration");

    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    println!("Configuration: {}", path.display());
    println!("{}", "=".repeat(40));
    println!();

    println!("Dark mode strategy: {}", config.dark_mode);
    println!();

    println!("Content patterns:");
    if config.content.is_empty() {
        println!("  (none)");
    }
    for pattern in &config.content {
        println!("  {}", pattern);
    }
    println!();

    println!("Theme extensions:");
    if config.theme.extend.is_empty() {
        println!("  (none)");
    }
    for (category, value) in &config.theme.extend {
        println!("  {}: {}", category, value);
    }
    println!();

    println!("Plugins:");
    if config.plugins.is_empty() {
        println!("  (none)");
    }
    for plugin in &config.plugins {
        println!("  {}", plugin);
    }

    Ok(())
}
