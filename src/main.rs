use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use slowest_test::{
    cli::{Cli, MAX_WIDTH, MIN_WIDTH},
    ingest,
    session::Session,
    terminal::TerminalReporter,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Open the event source: a file when given, stdin otherwise
fn open_input(args: &Cli) -> Result<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open event file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if !(MIN_WIDTH..=MAX_WIDTH).contains(&args.width) {
        anyhow::bail!(
            "Invalid value for --width: {} (must be between {} and {})",
            args.width,
            MIN_WIDTH,
            MAX_WIDTH
        );
    }

    init_tracing(args.debug);

    let reader = open_input(&args)?;
    let mut session = Session::new();
    let stdout = io::stdout();

    let ingested = if args.echo {
        let mut out = stdout.lock();
        ingest::drive(&mut session, reader, Some(&mut out as &mut dyn Write))
    } else {
        ingest::drive(&mut session, reader, None)
    };
    let stats = ingested.context("Failed to read test events")?;

    if stats.malformed > 0 {
        tracing::warn!("{} malformed event line(s) skipped", stats.malformed);
    }

    let mut reporter = TerminalReporter::with_width(stdout.lock(), args.width);
    let status = session.finish(&mut reporter);

    Ok(ExitCode::from(status.code()))
}
