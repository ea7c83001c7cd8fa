use chrono::NaiveDate;
use serde::Serialize;

use super::{Cents, Clock, Period, SystemClock, TotalCents, Transaction};

/// Aggregate totals over every transaction in a ledger.
/// Totals are summed in a wider type than single amounts, so they are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of strictly positive amounts
    pub total_income: TotalCents,
    /// Sum of strictly negative amounts (keeps the negative sign)
    pub total_expenses: TotalCents,
    /// total_income + total_expenses
    pub balance: TotalCents,
}

/// Append-only, insertion-ordered collection of transactions for one session.
#[derive(Debug)]
pub struct Ledger<C = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl Ledger<SystemClock> {
    /// Create an empty ledger that reads the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    /// Create an empty ledger using the given clock as the source of "today".
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    /// Append a new transaction to the end of the ledger.
    pub fn add(&mut self, date: NaiveDate, description: impl Into<String>, amount: Cents) {
        let transaction = Transaction::new(date, description, amount);
        tracing::debug!(
            date = %transaction.date(),
            amount,
            position = self.transactions.len(),
            "transaction recorded"
        );
        self.transactions.push(transaction);
    }

    /// List transactions falling in `period`, relative to the clock's current date.
    pub fn list(&self, period: Period) -> Vec<&Transaction> {
        self.list_as_of(period, self.clock.today())
    }

    /// List transactions falling in `period`, relative to an explicit reference date.
    /// Insertion order is preserved.
    pub fn list_as_of(&self, period: Period, today: NaiveDate) -> Vec<&Transaction> {
        let matched: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| period.contains(t.date(), today))
            .collect();
        tracing::debug!(%period, %today, matched = matched.len(), "listed transactions");
        matched
    }

    /// Compute income, expense and balance totals across all transactions.
    pub fn summarize(&self) -> Summary {
        let (total_income, total_expenses): (TotalCents, TotalCents) =
            self.transactions
                .iter()
                .fold((0, 0), |(income, expenses), t| {
                    let amount = TotalCents::from(t.amount());
                    match amount {
                        a if a > 0 => (income + a, expenses),
                        a if a < 0 => (income, expenses + a),
                        _ => (income, expenses),
                    }
                });

        Summary {
            total_income,
            total_expenses,
            balance: total_income + total_expenses,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
