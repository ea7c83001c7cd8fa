// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use finman::cli::{OutputFormat, Shell};
use finman::domain::{FixedClock, Ledger, Transaction};

/// Helper to parse a date string into a NaiveDate
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create an empty ledger whose "today" is pinned
pub fn ledger_on(today: &str) -> Ledger<FixedClock> {
    Ledger::with_clock(FixedClock(date(today)))
}

/// Descriptions of a listing, in order
pub fn descriptions(transactions: &[&Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.description().to_string())
        .collect()
}

/// Drive a shell session from a script of input lines and capture its output
pub fn run_session(
    today: &str,
    format: OutputFormat,
    script: &str,
) -> anyhow::Result<(Ledger<FixedClock>, String)> {
    let mut shell =
        Shell::new(ledger_on(today), script.as_bytes(), Vec::new()).with_format(format);
    shell.run()?;
    let (ledger, output) = shell.into_parts();
    Ok((ledger, String::from_utf8(output)?))
}

/// Test fixture: the March 2024 household scenario
pub struct MarchScenario;

impl MarchScenario {
    /// Salary, rent and groceries, in that order
    pub fn populate(ledger: &mut Ledger<FixedClock>) {
        ledger.add(date("2024-03-01"), "Salary", 300000);
        ledger.add(date("2024-03-05"), "Rent", -120000);
        ledger.add(date("2024-03-10"), "Groceries", -15050);
    }

    /// The same entries typed into the interactive menu
    pub fn script() -> &'static str {
        "1\n2024-03-01\nSalary\n3000\n\
         2\n2024-03-05\nRent\n1200\n\
         2\n2024-03-10\nGroceries\n150.50\n"
    }
}
