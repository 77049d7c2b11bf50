//! Core module - application infrastructure
//!
//! Configuration loading and the command line, shared by the windowed app
//! and the headless solver.
//!
//! # Modules
//!
//! - `config` - [`AppConfig`] (scene + board geometry) and its loading rules
//! - `cli` - [`Cli`] arguments and puzzle selection

pub mod cli;
pub mod config;

pub use cli::Cli;
pub use config::{settings_path, AppConfig, ConfigError};
