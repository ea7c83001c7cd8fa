use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so period filters stay deterministic in tests.
pub trait Clock {
    /// Returns today's calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let clock = FixedClock(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }
}
