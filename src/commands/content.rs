use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::glob::Pattern;
use crate::walk;

/// List the content glob patterns in order
pub fn list_command(config_path: Option<&Path>) -> Result<()> {
    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    for pattern in &config.content {
        println!("{}", pattern);
    }
    Ok(())
}

/// Add a content glob pattern
///
/// The pattern is compiled before saving; invalid patterns are rejected.
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
/// * `pattern` - Glob pattern, e.g. './src/**/*.rs'
///
/// # Returns
/// * `Ok(())` - Pattern added and saved
/// * `Err(anyhow::Error)` - Invalid pattern, duplicate, or configuration error
pub fn add_command(config_path: Option<&Path>, pattern: String) -> Result<()> {
    info!("Adding content pattern: {}", pattern);

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.add_content(pattern.clone())?;
    config.save(&path)?;

    println!("Added content pattern '{}'", pattern);
    Ok(())
}

/// Remove a content glob pattern
pub fn remove_command(config_path: Option<&Path>, pattern: &str) -> Result<()> {
    info!("Removing content pattern: {}", pattern);

    let path = Config::find(config_path)?;
    let mut config = Config::load(&path)?;
    config.remove_content(pattern)?;
    config.save(&path)?;

    println!("Removed content pattern '{}'", pattern);
    Ok(())
}

/// List project files matched by the content patterns
///
/// Resolves each pattern against the directory containing the config
/// file and prints the union of matches in sorted order.
pub fn files_command(config_path: Option<&Path>) -> Result<()> {
    info!("Resolving content patterns");

    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;

    let patterns = config
        .content
        .iter()
        .map(|p| Pattern::compile(p).with_context(|| format!("Invalid content pattern '{}'", p)))
        .collect::<Result<Vec<_>>>()?;

    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let files = walk::resolve_content(root, &patterns)?;

    if files.is_empty() {
        println!("No files matched by {} content pattern(s).", patterns.len());
        return Ok(());
    }

    for file in &files {
        println!("{}", file);
    }
    println!();
    println!("{} file(s) matched.", files.len());
    Ok(())
}
