use std::{io, process};

use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use vizvault::cli::{output, run, Cli};
use vizvault::{exitcode, BuildInfo};

fn main() {
    setup_logging();

    let cli = Cli::capture();
    let build_info = BuildInfo::from_build_env();

    let mut stdout = io::stdout().lock();
    let code = match run(cli.tokens(), &build_info, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            // every path exits 0, even when stdout is gone
            warn!(error = %e, would_exit = e.exit_code(), "output failed");
            output::error(&e);
            exitcode::OK
        }
    };
    drop(stdout);
    process::exit(code);
}

fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // stdout carries command output only
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
