//! Recorded spending entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{category::ExpenseCategory, common::*};

/// A single committed spending entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category,
            date,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.description, self.category, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_iso_date_and_category_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let expense = Expense::new("Lunch", 12.5, ExpenseCategory::FoodAndDining, date);
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["date"], "2024-03-09");
        assert_eq!(value["category"], "Food & Dining");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["id"], expense.id.to_string());
    }

    #[test]
    fn new_expenses_get_distinct_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let a = Expense::new("Bus", 2.0, ExpenseCategory::Transportation, date);
        let b = Expense::new("Bus", 2.0, ExpenseCategory::Transportation, date);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn display_label_lists_description_category_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let expense = Expense::new("Dentist", 80.0, ExpenseCategory::Healthcare, date);
        assert_eq!(expense.display_label(), "Dentist (Healthcare, 2024-03-09)");
    }
}
