use std::str::FromStr;

use crate::application::{parse_period, AppError};
use crate::domain::Period;

/// One entry of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    View(Period),
    Summarize,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddIncome,
        MenuChoice::AddExpense,
        MenuChoice::View(Period::All),
        MenuChoice::View(Period::Daily),
        MenuChoice::View(Period::Weekly),
        MenuChoice::View(Period::Monthly),
        MenuChoice::Summarize,
        MenuChoice::Exit,
    ];

    /// The text the user types to pick this entry.
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::AddIncome => "1",
            MenuChoice::AddExpense => "2",
            MenuChoice::View(Period::All) => "3",
            MenuChoice::View(Period::Daily) => "4",
            MenuChoice::View(Period::Weekly) => "5",
            MenuChoice::View(Period::Monthly) => "6",
            MenuChoice::Summarize => "7",
            MenuChoice::Exit => "8",
        }
    }

    /// The period shown by a view entry, `None` for every other entry.
    pub fn period(&self) -> Option<Period> {
        match self {
            MenuChoice::View(period) => Some(*period),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddIncome => "Add Income",
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::View(Period::All) => "View Transactions",
            MenuChoice::View(Period::Daily) => "View Transactions for Today",
            MenuChoice::View(Period::Weekly) => "View Transactions for This Week",
            MenuChoice::View(Period::Monthly) => "View Transactions for This Month",
            MenuChoice::Summarize => "Calculate Balance",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Accepts a menu number, or a period name (`all`, `daily`, `weekly`,
/// `monthly`) as a shortcut for the matching view entry.
impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(choice) = MenuChoice::ALL.into_iter().find(|c| c.key() == key) {
            return Ok(choice);
        }

        match parse_period(key) {
            Ok(period) => Ok(MenuChoice::View(period)),
            Err(err) => {
                tracing::debug!(error = %err, "menu input is neither a number nor a period");
                Err(AppError::InvalidChoice(key.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddIncome);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::AddExpense);
        assert_eq!(
            " 5\n".parse::<MenuChoice>().unwrap(),
            MenuChoice::View(Period::Weekly)
        );
        assert_eq!("8".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_period_names_as_view_choices() {
        assert_eq!(
            "weekly".parse::<MenuChoice>().unwrap(),
            MenuChoice::View(Period::Weekly)
        );
        assert_eq!(
            " Monthly\n".parse::<MenuChoice>().unwrap(),
            MenuChoice::View(Period::Monthly)
        );
        assert_eq!(
            "all".parse::<MenuChoice>().unwrap(),
            MenuChoice::View(Period::All)
        );
    }

    #[test]
    fn test_period_of_choice() {
        assert_eq!(MenuChoice::View(Period::Daily).period(), Some(Period::Daily));
        assert_eq!(MenuChoice::AddIncome.period(), None);
        assert_eq!(MenuChoice::Summarize.period(), None);

        let views: Vec<Period> = MenuChoice::ALL.iter().filter_map(|c| c.period()).collect();
        assert_eq!(views, Period::VARIANTS);
    }

    #[test]
    fn test_parse_invalid_choice() {
        for input in ["", "0", "9", "exit", "1.0", "yearly", "fortnightly"] {
            assert!(
                matches!(input.parse::<MenuChoice>(), Err(AppError::InvalidChoice(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_keys_are_sequential() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.key(), (index + 1).to_string());
        }
    }
}
