use anyhow::Result;
use clap::Parser;
use log::info;

use twconf::cli::app::{
    Cli, Commands, ContentSubcommands, DarkModeSubcommands, PluginSubcommands, ThemeSubcommands,
};
use twconf::commands::{self, check_command, init_command, show_command};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting twconf");

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init(args) => init_command(args.format, args.force),
        Commands::Show => show_command(config_path),
        Commands::Check => check_command(config_path),
        Commands::DarkMode(args) => match args.command {
            DarkModeSubcommands::Get => commands::dark_mode::get_command(config_path),
            DarkModeSubcommands::Set { strategy } => {
                commands::dark_mode::set_command(config_path, &strategy)
            }
        },
        Commands::Content(args) => match args.command {
            ContentSubcommands::List => commands::content::list_command(config_path),
            ContentSubcommands::Add { pattern } => {
                commands::content::add_command(config_path, pattern)
            }
            ContentSubcommands::Remove { pattern } => {
                commands::content::remove_command(config_path, &pattern)
            }
            ContentSubcommands::Files => commands::content::files_command(config_path),
        },
        Commands::Theme(args) => match args.command {
            ThemeSubcommands::List => commands::theme::list_command(config_path),
            ThemeSubcommands::Set { category, value } => {
                commands::theme::set_command(config_path, category, &value)
            }
            ThemeSubcommands::Unset { category } => {
                commands::theme::unset_command(config_path, &category)
            }
        },
        Commands::Plugin(args) => match args.command {
            PluginSubcommands::List => commands::plugin::list_command(config_path),
            PluginSubcommands::Add { name } => commands::plugin::add_command(config_path, name),
            PluginSubcommands::Remove { name } => {
                commands::plugin::remove_command(config_path, &name)
            }
        },
    }
}
