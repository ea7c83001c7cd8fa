use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time window applied when listing transactions.
/// Every window is computed relative to a reference date ("today").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    All,
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const VARIANTS: [Period; 4] = [Period::All, Period::Daily, Period::Weekly, Period::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Inclusive first and last day of the window containing `today`.
    /// Returns `None` for [`Period::All`], which is unbounded.
    pub fn date_range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::All => None,
            Period::Daily => Some((today, today)),
            Period::Weekly => {
                // Week starts on Monday
                let offset = u64::from(today.weekday().num_days_from_monday());
                let start = today
                    .checked_sub_days(Days::new(offset))
                    .unwrap_or(NaiveDate::MIN);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
                Some((start, end))
            }
            Period::Monthly => {
                let start = today.with_day(1).unwrap_or(today);
                // Last day is the day before the 1st of the following month
                let next_month = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
                };
                let end = next_month
                    .and_then(|first| first.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                Some((start, end))
            }
        }
    }

    /// Whether `date` falls inside this period relative to `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.date_range(today) {
            None => true,
            Some((start, end)) => start <= date && date <= end,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}' (expected one of: all, daily, weekly, monthly)")]
pub struct UnknownPeriodError(pub String);

impl FromStr for Period {
    type Err = UnknownPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Period::All),
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            _ => Err(UnknownPeriodError(s.to_string())),
        }
    }
}
