use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::glob::Pattern;

pub mod validate;

pub use validate::{Problem, Severity};

/// How the generated stylesheet toggles dark-theme styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Toggled via a CSS class on an ancestor element.
    Class,
    /// Follows the OS-level `prefers-color-scheme` media query.
    Media,
}

impl DarkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkMode::Class => "class",
            DarkMode::Media => "media",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DarkMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "class" => Ok(DarkMode::Class),
            "media" => Ok(DarkMode::Media),
            _ => Err(anyhow::anyhow!(
                "Invalid dark mode strategy '{}'. Must be 'class' or 'media'.",
                s
            )),
        }
    }
}

/// The `theme` section of the record. Only the `extend` mapping is
/// carried; base theme overrides belong to the external tool's defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: BTreeMap<String, serde_json::Value>,
}

/// The configuration record consumed by the utility-class CSS build tool.
///
/// Wire names follow the external tool's schema: `darkMode`, `content`,
/// `plugins`, `theme.extend`. The record is immutable for the lifetime
/// of a command: editing commands load, modify, save, and exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub dark_mode: DarkMode,
    pub content: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub theme: ThemeSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: DarkMode::Class,
            content: vec!["./src/**/*.rs".to_string(), "./index.html".to_string()],
            plugins: Vec::new(),
            theme: ThemeSection::default(),
        }
    }
}

/// Serialization format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => anyhow::bail!(
                "Unsupported config format: {:?} (expected a .json or .toml file)",
                path
            ),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Format::Json => "tailwind.config.json",
            Format::Toml => "tailwind.config.toml",
        }
    }
}

/// File names probed during discovery, in preference order.
const CANDIDATE_NAMES: [&str; 2] = ["tailwind.config.json", "tailwind.config.toml"];

impl Config {
    /// Resolves the config file path.
    ///
    /// # Arguments
    /// * `explicit` - Path given on the command line, if any
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The explicit path, or the nearest candidate file
    ///   found in the current directory or one of its ancestors
    /// * `Err(anyhow::Error)` - No config file found
    pub fn find(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        for dir in cwd.ancestors() {
            for name in CANDIDATE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    debug!("Found config file: {:?}", candidate);
                    return Ok(candidate);
                }
            }
        }

        anyhow::bail!(
            "No tailwind.config.json or tailwind.config.toml found in {:?} or any parent directory",
            cwd
        );
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?,
            Format::Toml => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?,
        };

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        let content = match Format::from_path(path)? {
            Format::Json => {
                let mut json = serde_json::to_string_pretty(self)
                    .context("Failed to serialize config to JSON")?;
                json.push('\n');
                json
            }
            Format::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize config to TOML")?
            }
        };

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn set_dark_mode(&mut self, mode: DarkMode) {
        info!("Setting dark mode strategy to: {}", mode);
        self.dark_mode = mode;
    }

    /// Appends a content glob, preserving order.
    ///
    /// The pattern is compiled first; syntactically invalid patterns and
    /// duplicates are rejected.
    pub fn add_content(&mut self, pattern: String) -> Result<()> {
        Pattern::compile(&pattern)
            .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;

        if self.content.contains(&pattern) {
            anyhow::bail!("Content pattern '{}' is already present", pattern);
        }

        info!("Adding content pattern: {}", pattern);
        self.content.push(pattern);
        Ok(())
    }

    pub fn remove_content(&mut self, pattern: &str) -> Result<()> {
        let index = self
            .content
            .iter()
            .position(|p| p == pattern)
            .ok_or_else(|| anyhow::anyhow!("Content pattern '{}' not found", pattern))?;

        info!("Removing content pattern: {}", pattern);
        self.content.remove(index);
        Ok(())
    }

    pub fn set_theme_extension(&mut self, category: String, value: serde_json::Value) {
        info!("Setting theme.extend.{}", category);
        self.theme.extend.insert(category, value);
    }

    pub fn unset_theme_extension(&mut self, category: &str) -> Result<()> {
        if self.theme.extend.remove(category).is_none() {
            anyhow::bail!("Theme extension category '{}' not found", category);
        }
        info!("Removed theme.extend.{}", category);
        Ok(())
    }

    pub fn add_plugin(&mut self, name: String) -> Result<()> {
        if self.plugins.contains(&name) {
            anyhow::bail!("Plugin '{}' is already present", name);
        }
        info!("Adding plugin: {}", name);
        self.plugins.push(name);
        Ok(())
    }

    pub fn remove_plugin(&mut self, name: &str) -> Result<()> {
        let index = self
            .plugins
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| anyhow::anyhow!("Plugin '{}' not found", name))?;

        info!("Removing plugin: {}", name);
        self.plugins.remove(index);
        Ok(())
    }
}
