mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Command::Completions(args) = &cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "fmc", &mut std::io::stdout());
        return;
    }

    let guard = match init_tracing(&cli) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::dispatch(cli.command, &cli.global).await {
        tracing::error!("{err}");
        eprintln!("{:?}", miette::Report::new(err));
        // exit() skips destructors; flush the log worker first.
        drop(guard);
        std::process::exit(1);
    }
}

/// Set up tracing: an append-only file log (always on) plus a stderr
/// mirror gated by `-v`.
///
/// Returns the non-blocking writer guard; it must stay alive until the
/// process ends or buffered lines are lost.
fn init_tracing(cli: &Cli) -> Result<WorkerGuard, CliError> {
    let log_path = &cli.global.log_file;
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("fmc_add_ftd.log"));

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(log_name.to_string_lossy())
        .build(log_dir)
        .map_err(|e| CliError::Validation {
            field: "log-file".into(),
            reason: e.to_string(),
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // The file log keeps full detail for our crates unless RUST_LOG
    // overrides it.
    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,fmc=debug,fmc_api=debug"));

    // stderr stays reserved for human-readable progress; tracing mirrors
    // onto it only when -v is given.
    let stderr_directive = match cli.global.verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(file_filter),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::new(stderr_directive)),
        )
        .init();

    Ok(guard)
}
