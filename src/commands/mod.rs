pub mod check;
pub mod content;
pub mod dark_mode;
pub mod init;
pub mod plugin;
pub mod show;
pub mod theme;

pub use check::check_command;
pub use init::init_command;
pub use show::show_command;
