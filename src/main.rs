use anyhow::{bail, Context, Result};
use clap::Parser;
use http_status_catalog::HttpStatus;
use std::io::{self, IsTerminal, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Look up HTTP status codes in the catalog.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Status codes to look up
    #[arg(required_unless_present = "list")]
    codes: Vec<String>,

    /// Attach a message to every printed status
    #[arg(short, long)]
    message: Option<String>,

    /// Print one JSON object per line
    #[arg(long)]
    json: bool,

    /// Print every registered status
    #[arg(short, long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut statuses = Vec::new();
    if args.list {
        statuses.extend(HttpStatus::all().cloned());
    }

    let mut failures = 0;
    for code in &args.codes {
        match code.parse::<HttpStatus>() {
            Ok(status) => statuses.push(status),
            Err(e) => {
                warn!("{}", e);
                failures += 1;
            }
        }
    }

    if let Some(message) = &args.message {
        statuses = statuses
            .iter()
            .map(|status| status.with_message(message.as_str()))
            .collect();
    }

    let mut stdout = io::stdout().lock();
    for status in &statuses {
        print_status(&mut stdout, status, args.json)?;
    }
    debug!("printed {} statuses", statuses.len());

    if failures > 0 {
        bail!("{} of {} codes could not be resolved", failures, args.codes.len());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn print_status(out: &mut impl Write, status: &HttpStatus, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(status).context("Failed to serialize status")?;
        writeln!(out, "{}", line).context("Failed to write status")?;
    } else {
        let written = match status.extension() {
            Some(vendor) => writeln!(out, "{} [{}]", status, vendor),
            None => writeln!(out, "{}", status),
        };
        written.context("Failed to write status")?;
    }
    Ok(())
}
