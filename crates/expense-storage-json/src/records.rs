//! Encoding of the four persisted records.

use std::collections::HashSet;

use expense_core::parse_decimal;
use expense_domain::{CurrencyChoice, Expense};

pub const EXPENSES_KEY: &str = "expenses";
pub const CURRENCY_KEY: &str = "selectedCurrency";
pub const SALARY_KEY: &str = "salary";
pub const SAVINGS_KEY: &str = "savings";

pub fn encode_expenses(expenses: &[Expense], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(expenses)
    } else {
        serde_json::to_string(expenses)
    }
}

/// Parses the expense list. Any entry a commit could not have produced
/// rejects the whole record.
pub fn decode_expenses(raw: &str) -> Result<Vec<Expense>, String> {
    let expenses: Vec<Expense> = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let mut seen = HashSet::with_capacity(expenses.len());
    for (index, expense) in expenses.iter().enumerate() {
        if expense.description.trim().is_empty() {
            return Err(format!("expense {index} has an empty description"));
        }
        if !expense.amount.is_finite() || expense.amount <= 0.0 {
            return Err(format!(
                "expense {index} has non-positive amount {}",
                expense.amount
            ));
        }
        if !seen.insert(expense.id) {
            return Err(format!("expense id {} appears more than once", expense.id));
        }
    }
    Ok(expenses)
}

pub fn encode_currency(currency: &CurrencyChoice, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(currency)
    } else {
        serde_json::to_string(currency)
    }
}

pub fn decode_currency(raw: &str) -> Result<CurrencyChoice, String> {
    serde_json::from_str(raw).map_err(|err| err.to_string())
}

/// Decimals are stored as plain text, e.g. `10000` or `10000.5`.
pub fn encode_decimal(value: f64) -> String {
    value.to_string()
}

pub fn decode_salary(raw: &str) -> Result<f64, String> {
    match parse_decimal(raw) {
        Some(value) if value > 0.0 => Ok(value),
        Some(value) => Err(format!("salary must be positive, found {value}")),
        None => Err(format!("`{}` is not a decimal", raw.trim())),
    }
}

pub fn decode_savings(raw: &str) -> Result<f64, String> {
    match parse_decimal(raw) {
        Some(value) if value >= 0.0 => Ok(value),
        Some(value) => Err(format!("savings must not be negative, found {value}")),
        None => Err(format!("`{}` is not a decimal", raw.trim())),
    }
}
