//! CLI-level errors

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot write output: {context}")]
    Output {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an output error with context.
    pub fn output(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            context: context.into(),
            source,
        }
    }

    /// Exit code this error would map to under sysexits.
    ///
    /// The entry point still exits with `exitcode::OK`; this is reported in logs.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Output { .. } => crate::exitcode::IOERR,
        }
    }
}
