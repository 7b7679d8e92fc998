//! The closed set of spending categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Spending categories offered by the expense form.
///
/// Serialized by display label so persisted records read `"Food & Dining"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    Housing,
    Healthcare,
    Education,
    Other,
}

impl ExpenseCategory {
    /// Every category, in the order the form lists them.
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Shopping,
        ExpenseCategory::Housing,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Resolves a label, ignoring surrounding whitespace and ASCII case.
    pub fn from_label(value: &str) -> Option<Self> {
        let needle = value.trim();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when text does not name one of [`ExpenseCategory::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown expense category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn from_label_is_lenient_on_case_and_whitespace() {
        assert_eq!(
            ExpenseCategory::from_label("  food & dining "),
            Some(ExpenseCategory::FoodAndDining)
        );
        assert_eq!(ExpenseCategory::from_label(""), None);
        assert_eq!(ExpenseCategory::from_label("Groceries"), None);
    }

    #[test]
    fn serializes_by_label() {
        let json = serde_json::to_string(&ExpenseCategory::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");
        let parsed: ExpenseCategory = serde_json::from_str("\"Healthcare\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Healthcare);
    }
}
