//! CLI argument capture using clap
//!
//! There are no flags: every token, including `--help`, `--version` and a
//! leading `--`, is captured verbatim and left to the dispatcher.

use std::ffi::OsString;

use clap::Parser;
use tracing::warn;

const ESCAPE: &str = "--";

/// VizVault - Backup for your Vizzes
#[derive(Parser, Debug, Default)]
#[command(name = "vizvault")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command token followed by ignored arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Capture the process arguments.
    pub fn capture() -> Self {
        Self::capture_from(std::env::args_os())
    }

    /// Capture from an explicit argument list (first item is the binary name).
    ///
    /// Never fails: if clap rejects the list, the tokens are empty.
    pub fn capture_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        // clap consumes a leading end-of-options marker
        let escaped = argv.get(1).is_some_and(|t| t.as_os_str() == ESCAPE);

        let mut cli = Self::try_parse_from(argv.iter().cloned()).unwrap_or_else(|e| {
            warn!(error = %e, "cannot capture arguments, no tokens");
            Self::default()
        });
        if escaped {
            cli.args.insert(0, OsString::from(ESCAPE));
        }
        cli
    }

    pub fn tokens(&self) -> &[OsString] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_no_tokens_when_captured_then_args_empty() {
        let cli = Cli::capture_from(["vizvault"]);
        assert!(cli.tokens().is_empty());
    }

    #[rstest]
    #[case(&["vizvault", "version"], &["version"])]
    #[case(&["vizvault", "version", "extra", "args"], &["version", "extra", "args"])]
    #[case(&["vizvault", "--help"], &["--help"])]
    #[case(&["vizvault", "--version"], &["--version"])]
    #[case(&["vizvault", "-h", "health"], &["-h", "health"])]
    #[case(&["vizvault", "health", "--verbose"], &["health", "--verbose"])]
    #[case(&["vizvault", "--"], &["--"])]
    #[case(&["vizvault", "--", "health"], &["--", "health"])]
    #[case(&["vizvault", "--", "--", "version"], &["--", "--", "version"])]
    #[case(&["vizvault", "health", "--", "version"], &["health", "--", "version"])]
    fn given_tokens_when_captured_then_kept_verbatim(
        #[case] argv: &[&str],
        #[case] expected: &[&str],
    ) {
        let cli = Cli::capture_from(argv.iter().copied());
        let tokens: Vec<_> = cli.tokens().iter().map(|t| t.to_str().unwrap()).collect();
        assert_eq!(tokens, expected);
    }
}
