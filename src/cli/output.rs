//! Terminal output
//!
//! Data lines go to the given writer uncolored. Diagnostics go to stderr;
//! colors respect NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::cli::error::{CliError, CliResult};

/// Write one plain line and flush
pub fn line<W: Write + ?Sized>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
    writeln!(out, "{}", msg).map_err(|e| CliError::output(msg.to_string(), e))?;
    out.flush().map_err(|e| CliError::output("flush", e))
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}
