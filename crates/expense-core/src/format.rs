//! Text the presentation layer renders verbatim.

use chrono::NaiveDate;

use expense_domain::CurrencyChoice;

use crate::ExpenseCandidate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &CurrencyChoice) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Symbol prefix with two decimals, e.g. `R$1250.00`. Sign precedes the symbol.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolFormatter;

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: f64, currency: &CurrencyChoice) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", currency.symbol, amount.abs())
        } else {
            format!("{}{:.2}", currency.symbol, amount)
        }
    }
}

/// ISO calendar dates, `YYYY-MM-DD`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

pub fn format_amount(currency: &CurrencyChoice, amount: f64) -> String {
    SymbolFormatter.format_amount(amount, currency)
}

/// Message shown before a candidate that exceeds the balance is confirmed.
pub fn budget_alert_message(currency: &CurrencyChoice, candidate: &ExpenseCandidate) -> String {
    format!(
        "Warning: This expense of {} exceeds your available balance of {}!",
        format_amount(currency, candidate.amount()),
        format_amount(currency, candidate.available_balance())
    )
}

/// Selector label, e.g. `USD ($) - US Dollar`.
pub fn currency_option_label(currency: &CurrencyChoice) -> String {
    format!("{} ({}) - {}", currency.code, currency.symbol, currency.name)
}
