//! ibooks-notes-exporter CLI - Export highlights and notes from Apple Books
//!
//! Usage:
//!   ibooks-notes-exporter books                                   - List books with highlights
//!   ibooks-notes-exporter export --book_id=<ID> [--skip_first_x_notes=<N>] - Export one book
//!   ibooks-notes-exporter version                                 - Print version

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use ibooks_notes_exporter::cli::{commands, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {:#}", "Warning:".yellow().bold(), e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so exported Markdown on stdout stays clean.
fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("ibooks_notes_exporter={}", log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot initialize logging: {}", e))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out)
}
