//! CAAB assessment CLI library.
//!
//! This library provides the core functionality for the `caab-assess` command-line
//! interface: loading exported assessment and evidence files, running the rules
//! over them, configuration management, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
