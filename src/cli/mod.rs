//! CLI layer: argument capture and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{execute_command, run, Command};
pub use error::{CliError, CliResult};
