pub mod cli;
pub mod commands;
pub mod config;
pub mod glob;
pub mod ui;
pub mod walk;
