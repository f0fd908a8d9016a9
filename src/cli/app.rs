use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "twconf")]
#[command(about = "A CLI tool for managing Tailwind-style utility CSS configuration files")]
pub struct Cli {
    /// Path to the config file (discovered from the current directory upward if omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default config file in the current directory
    Init(InitArgs),
    /// Print the configuration record
    Show,
    /// Validate the configuration record
    Check,
    /// Dark-mode activation strategy
    DarkMode(DarkModeCommands),
    /// Content glob patterns
    Content(ContentCommands),
    /// Theme extensions (theme.extend)
    Theme(ThemeCommands),
    /// Plugin references
    Plugin(PluginCommands),
}

#[derive(Args)]
pub struct InitArgs {
    /// Serialization format of the new config file
    #[arg(long, default_value = "json")]
    pub format: InitFormat,

    /// Overwrite an existing config file without prompting
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum InitFormat {
    /// tailwind.config.json
    Json,
    /// tailwind.config.toml
    Toml,
}

#[derive(Args)]
pub struct DarkModeCommands {
    #[command(subcommand)]
    pub command: DarkModeSubcommands,
}

#[derive(Subcommand)]
pub enum DarkModeSubcommands {
    /// Print the current strategy
    Get,
    /// Set the strategy
    Set {
        /// 'class' or 'media'
        strategy: String,
    },
}

#[derive(Args)]
pub struct ContentCommands {
    #[command(subcommand)]
    pub command: ContentSubcommands,
}

#[derive(Subcommand)]
pub enum ContentSubcommands {
    /// List the content glob patterns in order
    List,
    /// Add a content glob pattern
    Add {
        /// Glob pattern, e.g. './src/**/*.rs'
        pattern: String,
    },
    /// Remove a content glob pattern
    Remove {
        /// The exact pattern to remove
        pattern: String,
    },
    /// List project files matched by the content patterns
    Files,
}

#[derive(Args)]
pub struct ThemeCommands {
    #[command(subcommand)]
    pub command: ThemeSubcommands,
}

#[derive(Subcommand)]
pub enum ThemeSubcommands {
    /// List theme extension categories and their overrides
    List,
    /// Set the override value for a category
    Set {
        /// Theme-token category, e.g. 'colors'
        category: String,
        /// Override value as JSON, e.g. '{"brand": "#b91c1c"}'
        value: String,
    },
    /// Remove a category override
    Unset {
        /// Theme-token category
        category: String,
    },
}

#[derive(Args)]
pub struct PluginCommands {
    #[command(subcommand)]
    pub command: PluginSubcommands,
}

#[derive(Subcommand)]
pub enum PluginSubcommands {
    /// List plugin references in order
    List,
    /// Add a plugin reference
    Add {
        /// Package name, e.g. '@tailwindcss/typography'
        name: String,
    },
    /// Remove a plugin reference
    Remove {
        /// The exact reference to remove
        name: String,
    },
}
