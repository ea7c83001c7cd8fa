use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use crate::application::parse_date;
use crate::domain::{Clock, FixedClock, Ledger};

mod menu;
mod shell;

pub use menu::MenuChoice;
pub use shell::Shell;

/// Finman - Personal Finance Manager
#[derive(Parser, Debug)]
#[command(name = "finman")]
#[command(about = "Record income and expenses, list them by period and total them up")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Pin "today" for the daily/weekly/monthly views (YYYY-MM-DD, defaults to the system date)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// How listings and summaries are rendered
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Rendering used for transaction listings and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose)?;

        match self.today {
            Some(today) => {
                tracing::info!(%today, "using fixed reference date");
                self.run_shell(Ledger::with_clock(FixedClock(today)))
            }
            None => self.run_shell(Ledger::new()),
        }
    }

    fn run_shell<C: Clock>(&self, ledger: Ledger<C>) -> Result<()> {
        let stdin = io::stdin();
        let mut shell =
            Shell::new(ledger, stdin.lock(), io::stdout().lock()).with_format(self.format);
        shell.run().context("Interactive session failed")?;
        Ok(())
    }
}

/// Install the global tracing subscriber. Logs go to stderr so rendered
/// output on stdout stays clean.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref(), verbose)?;

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    Ok(())
}

/// Build the log filter: `RUST_LOG` when set and valid, `finman=warn` otherwise.
/// `--verbose` raises this crate to `debug` on top of either.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("finman=warn"));

    if verbose {
        let directive: Directive = "finman=debug".parse().context("Invalid log directive")?;
        return Ok(filter.add_directive(directive));
    }
    Ok(filter)
}
