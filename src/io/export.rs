use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::AppError;
use crate::domain::{format_cents, Cents, Summary, Transaction};

/// Machine-readable view of a transaction, carrying the amount both as a
/// decimal string and as raw cents.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord<'a> {
    pub date: NaiveDate,
    pub description: &'a str,
    pub amount: String,
    pub amount_cents: Cents,
}

impl<'a> From<&'a Transaction> for TransactionRecord<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            date: transaction.date(),
            description: transaction.description(),
            amount: format_cents(transaction.amount()),
            amount_cents: transaction.amount(),
        }
    }
}

/// Machine-readable view of a [`Summary`] with decimal amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub total_income: String,
    pub total_expenses: String,
    pub balance: String,
}

impl From<&Summary> for SummaryRecord {
    fn from(summary: &Summary) -> Self {
        Self {
            total_income: format_cents(summary.total_income),
            total_expenses: format_cents(summary.total_expenses),
            balance: format_cents(summary.balance),
        }
    }
}

/// Write transactions as CSV with a header row. Returns the number of records written.
pub fn write_transactions_csv<W: Write>(
    writer: W,
    transactions: &[&Transaction],
) -> Result<usize, AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["date", "description", "amount", "amount_cents"])?;

    for transaction in transactions {
        let record = TransactionRecord::from(*transaction);
        csv_writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.description.to_string(),
            record.amount,
            record.amount_cents.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

/// Write transactions as a pretty-printed JSON array. Returns the number of records written.
pub fn write_transactions_json<W: Write>(
    mut writer: W,
    transactions: &[&Transaction],
) -> Result<usize, AppError> {
    let records: Vec<TransactionRecord<'_>> = transactions
        .iter()
        .map(|t| TransactionRecord::from(*t))
        .collect();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(records.len())
}

/// Write a summary as a single CSV row under a header.
pub fn write_summary_csv<W: Write>(writer: W, summary: &Summary) -> Result<(), AppError> {
    let record = SummaryRecord::from(summary);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["total_income", "total_expenses", "balance"])?;
    csv_writer.write_record([&record.total_income, &record.total_expenses, &record.balance])?;

    csv_writer.flush()?;
    Ok(())
}

/// Write a summary as a pretty-printed JSON object.
pub fn write_summary_json<W: Write>(mut writer: W, summary: &Summary) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, &SummaryRecord::from(summary))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
