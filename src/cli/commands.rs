//! Command dispatch
//!
//! Only the first token is inspected. Unknown tokens fall through to the
//! banner, so dispatch never fails on input.

use std::ffi::OsStr;
use std::io::Write;

use tracing::{debug, instrument};

use crate::build_info::BuildInfo;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::exitcode;

pub const BANNER: &str = "VizVault - Backup for your Vizzes";
pub const HEALTH_OK: &str = "OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print build metadata
    Version,
    /// Liveness probe
    Health,
    /// Default banner
    Banner,
}

impl Command {
    /// Map the first command token to a command. Matching is exact and case-sensitive.
    pub fn parse_token(token: Option<&OsStr>) -> Self {
        match token.and_then(OsStr::to_str) {
            Some("version") => Command::Version,
            Some("health") => Command::Health,
            _ => Command::Banner,
        }
    }

    /// Pick the command from an argument list without the binary name.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        let first = args.into_iter().next();
        Self::parse_token(first.as_ref().map(AsRef::<OsStr>::as_ref))
    }
}

/// Perform the command's single write and return the exit code.
#[instrument(level = "debug", skip(build_info, out))]
pub fn execute_command<W: Write + ?Sized>(
    command: Command,
    build_info: &BuildInfo,
    out: &mut W,
) -> CliResult<i32> {
    match command {
        Command::Version => output::line(out, build_info)?,
        Command::Health => output::line(out, HEALTH_OK)?,
        Command::Banner => output::line(out, BANNER)?,
    }
    Ok(exitcode::OK)
}

/// Dispatch an argument list (without the binary name).
pub fn run<I, T, W>(args: I, build_info: &BuildInfo, out: &mut W) -> CliResult<i32>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
    W: Write + ?Sized,
{
    let command = Command::from_args(args);
    debug!(?command, "dispatching");
    execute_command(command, build_info, out)
}
