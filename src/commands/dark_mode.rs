use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::{Config, DarkMode};

/// Print the current dark-mode strategy
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
///
/// # Returns
/// * `Ok(())` - Strategy displayed successfully
/// * `Err(anyhow::Error)` - Configuration error
pub fn get_command(config_path: Option<&Path>) -> Result<()> {
    info!("Getting dark mode strategy");

    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    println!("{}", config.dark_mode);
    Ok(())
}

/// Set the dark-mode strategy
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
/// * `strategy` - 'class' or 'media'
///
/// # Returns
/// * `Ok(())` - Strategy updated and saved
/// * `Err(anyhow::Error)` - Invalid strategy or configuration error
pub fn set_command(config_path: Option<&Path>, strategy: &str) -> Result<()> {
    info!("Setting dark mode strategy to {}", strategy);

    let mode: DarkMode = strategy.parse()?;

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.set_dark_mode(mode);
    config.save(&path)?;

    println!("Set darkMode to {}", mode);
    Ok(())
}
