use anyhow::Result;
use colored::Colorize;
use is_terminal::IsTerminal;
use log::info;
use std::path::Path;

use crate::config::{Config, Severity};

/// Validate the configuration record
///
/// Prints every problem found, colored by severity when stdout is a
/// terminal, and fails iff any problem is an error.
///
/// # Arguments
/// * `config_path` - Explicit config file path, if given
///
/// # Returns
/// * `Ok(())` - No errors (warnings may have been printed)
/// * `Err(anyhow::Error)` - Discovery/parse failure, or validation errors
pub fn check_command(config_path: Option<&Path>) -> Result<()> {
    info!("Checking configuration");

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let path = Config::find(config_path)?;
    let config = Config::load(&path)?;
    let problems = config.validate();

    if problems.is_empty() {
        println!("{} {} is valid", "ok:".green().bold(), path.display());
        return Ok(());
    }

    let mut errors = 0;
    for problem in &problems {
        let tag = match problem.severity {
            Severity::Error => {
                errors += 1;
                "error:".red().bold()
            }
            Severity::Warning => "warning:".yellow().bold(),
        };
        println!("{} {}", tag, problem.message);
    }

    if errors > 0 {
        anyhow::bail!("{} error(s) found in {}", errors, path.display());
    }
    Ok(())
}
