use thiserror::Error;

use crate::domain::{ParseAmountError, UnknownPeriodError};

/// Errors raised at the boundary between user text and the ledger.
/// The ledger itself never fails; these only come from parsing input or writing output.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error(transparent)]
    UnknownPeriod(#[from] UnknownPeriodError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the user can recover by entering different input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidChoice(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidAmount(_)
                | AppError::UnknownPeriod(_)
        )
    }
}
