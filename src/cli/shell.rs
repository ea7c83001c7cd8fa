use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::application::{parse_amount, parse_date, AppError};
use crate::domain::{format_cents, Cents, Clock, Ledger, Period, Transaction};
use crate::io::{
    write_summary_csv, write_summary_json, write_transactions_csv, write_transactions_json,
};

use super::{MenuChoice, OutputFormat};

/// Interactive menu loop over a single session's ledger.
///
/// The shell owns the ledger for the lifetime of the session and performs all
/// prompting, parsing and rendering. Input and output are generic so the whole
/// loop can be driven from in-memory buffers.
pub struct Shell<C, R, W> {
    ledger: Ledger<C>,
    input: R,
    output: W,
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Income,
    Expense,
}

impl<C: Clock, R: BufRead, W: Write> Shell<C, R, W> {
    pub fn new(ledger: Ledger<C>, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
            format: OutputFormat::Table,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    /// Consume the shell, handing back the ledger and the output sink.
    pub fn into_parts(self) -> (Ledger<C>, W) {
        (self.ledger, self.output)
    }

    /// Run the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<(), AppError> {
        tracing::info!(format = ?self.format, "session started");

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line("Enter your choice: ")? else {
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    tracing::debug!(error = %err, "rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if self.execute(choice)?.is_break() {
                break;
            }
        }

        tracing::info!(transactions = self.ledger.len(), "session ended");
        Ok(())
    }

    /// Perform a single menu action.
    pub fn execute(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, AppError> {
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddIncome => self.add_entry(EntryKind::Income),
            MenuChoice::AddExpense => self.add_entry(EntryKind::Expense),
            MenuChoice::View(period) => {
                self.view(period)?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::Summarize => {
                self.show_summary()?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Personal Finance Manager =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn add_entry(&mut self, kind: EntryKind) -> Result<ControlFlow<()>, AppError> {
        let Some(date) = self.prompt_parsed("Enter date (YYYY-MM-DD): ", parse_date)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(description) = self.read_line("Enter description: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let amount_prompt = match kind {
            EntryKind::Income => "Enter income amount: ",
            EntryKind::Expense => "Enter expense amount: ",
        };
        let Some(amount) = self.prompt_parsed(amount_prompt, parse_amount)? else {
            return Ok(ControlFlow::Break(()));
        };

        // Expenses are entered as positive figures and stored negated
        let amount: Cents = match kind {
            EntryKind::Income => amount,
            EntryKind::Expense => -amount,
        };

        self.ledger.add(date, description, amount);
        writeln!(self.output, "Transaction added successfully!")?;
        Ok(ControlFlow::Continue(()))
    }

    fn view(&mut self, period: Period) -> Result<(), AppError> {
        // Checked before filtering so "nothing recorded" reads differently from "nothing matched"
        if self.ledger.is_empty() {
            writeln!(self.output, "Your transaction history is empty!")?;
            return Ok(());
        }

        let transactions = self.ledger.list(period);

        match self.format {
            OutputFormat::Json => {
                write_transactions_json(&mut self.output, &transactions)?;
            }
            OutputFormat::Csv => {
                write_transactions_csv(&mut self.output, &transactions)?;
            }
            OutputFormat::Table => print_history(&mut self.output, period, &transactions)?,
        }
        Ok(())
    }

    fn show_summary(&mut self) -> Result<(), AppError> {
        let summary = self.ledger.summarize();

        match self.format {
            OutputFormat::Json => write_summary_json(&mut self.output, &summary)?,
            OutputFormat::Csv => write_summary_csv(&mut self.output, &summary)?,
            OutputFormat::Table => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "Total Income: {}",
                    format_cents(summary.total_income)
                )?;
                writeln!(
                    self.output,
                    "Total Expenses: {}",
                    format_cents(summary.total_expenses)
                )?;
                writeln!(
                    self.output,
                    "Current Balance: {}",
                    format_cents(summary.balance)
                )?;
            }
        }
        Ok(())
    }

    /// Prompt repeatedly until `parse` accepts the answer.
    /// Returns `None` if input runs out first.
    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, AppError>,
    ) -> Result<Option<T>, AppError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) if err.is_input_error() => {
                    tracing::debug!(error = %err, "rejected input");
                    writeln!(self.output, "{}. Please try again.", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Print `prompt` and read one line, without its trailing newline.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn print_history<W: Write>(
    output: &mut W,
    period: Period,
    transactions: &[&Transaction],
) -> Result<(), AppError> {
    writeln!(output)?;
    match period {
        Period::All => writeln!(output, "Transaction History:")?,
        _ => writeln!(output, "Transaction History ({}):", period)?,
    }

    if transactions.is_empty() {
        writeln!(output, "No transactions found for this period.")?;
        return Ok(());
    }

    writeln!(output, "{:<12} {:>12}  DESCRIPTION", "DATE", "AMOUNT")?;
    writeln!(output, "{}", "-".repeat(50))?;
    for transaction in transactions {
        writeln!(
            output,
            "{:<12} {:>12}  {}",
            transaction.date().format("%Y-%m-%d").to_string(),
            format_cents(transaction.amount()),
            transaction.description()
        )?;
    }
    Ok(())
}
