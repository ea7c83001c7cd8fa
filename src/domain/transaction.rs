use chrono::NaiveDate;
use serde::Serialize;

use super::Cents;

/// A single dated ledger entry.
/// Positive amounts are income, negative amounts are expenses, zero is neither.
/// Records are immutable once appended to a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    description: String,
    #[serde(rename = "amount_cents")]
    amount: Cents,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, description: impl Into<String>, amount: Cents) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_transaction() {
        let tx = Transaction::new(date("2024-03-01"), "Salary", 300000);

        assert_eq!(tx.date(), date("2024-03-01"));
        assert_eq!(tx.description(), "Salary");
        assert_eq!(tx.amount(), 300000);
        assert!(tx.is_income());
        assert!(!tx.is_expense());
    }

    #[test]
    fn test_zero_amount_is_neither() {
        let tx = Transaction::new(date("2024-03-01"), "", 0);

        assert!(!tx.is_income());
        assert!(!tx.is_expense());
        assert_eq!(tx.description(), "");
    }

    #[test]
    fn test_serializes_date_as_iso() {
        let tx = Transaction::new(date("2024-03-05"), "Rent", -120000);
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["description"], "Rent");
        assert_eq!(json["amount_cents"], -120000);
    }
}
