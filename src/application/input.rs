use chrono::NaiveDate;

use crate::domain::{parse_cents, Cents, Period};

use super::AppError;

/// Parse a calendar date in strict `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(input.to_string()))
}

/// Parse a decimal amount such as `150.50` into cents.
pub fn parse_amount(input: &str) -> Result<Cents, AppError> {
    Ok(parse_cents(input)?)
}

/// Parse a period name (`all`, `daily`, `weekly`, `monthly`).
pub fn parse_period(input: &str) -> Result<Period, AppError> {
    Ok(input.parse::<Period>()?)
}
