//! expense-domain
//!
//! Pure domain models (Expense, ExpenseCategory, CurrencyChoice, BudgetConfig, Ledger).
//! No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod currency;
pub mod expense;
pub mod ledger;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use currency::*;
pub use expense::*;
pub use ledger::*;
