//! bars-patcher binary entry point.
//!
//! Parses arguments, initializes logging and runs the patcher. Every
//! failure exits with status 255; printing usage (no arguments, `--help`,
//! `--version`) exits with 0.

use anyhow::Context;
use bars_patcher::{EXIT_FAILURE, LogLevel, PatchConfig, PatchError, Patcher};
use clap::error::ErrorKind;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let config = match PatchConfig::try_from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => return usage_exit(&err),
    };

    init_tracing(config.log_level);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Printed directly so the message survives any log filter
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<PatchError>()
                .map_or(EXIT_FAILURE, PatchError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(config: PatchConfig) -> anyhow::Result<()> {
    let output = config.output.clone();
    let report = Patcher::new(config)
        .run()
        .with_context(|| format!("failed to produce {}", output.display()))?;
    tracing::debug!(
        "replaced record {} at {:#x} ({} bytes)",
        report.fingerprint,
        report.region.offset,
        report.patch_length
    );
    Ok(())
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG takes precedence over --log-level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(Level::from(level).as_str().to_ascii_lowercase())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn usage_exit(err: &clap::Error) -> ExitCode {
    // Best effort: nothing useful to do if the terminal is gone
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_FAILURE),
    }
}
