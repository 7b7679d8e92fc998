//! Two-phase creation of expenses: validate into a candidate, then commit.

use uuid::Uuid;

use expense_domain::{Displayable, Expense, ExpenseCategory, Ledger};

use crate::{Clock, ValidationError};

/// A validated expense that has not been recorded yet.
///
/// Carries the balance it was checked against so a confirmation prompt can
/// quote both figures without re-validating input. Only
/// [`ExpenseService::add_expense`] can produce one:
///
/// ```compile_fail
/// use expense_core::ExpenseCandidate;
/// use expense_domain::ExpenseCategory;
///
/// let forged = ExpenseCandidate {
///     description: String::new(),
///     amount: f64::NAN,
///     category: ExpenseCategory::Other,
///     available_balance: 0.0,
///     exceeds_balance: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCandidate {
    description: String,
    amount: f64,
    category: ExpenseCategory,
    available_balance: f64,
    exceeds_balance: bool,
}

impl ExpenseCandidate {
    /// Trimmed, non-empty description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Finite and greater than zero.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    /// Balance at validation time.
    pub fn available_balance(&self) -> f64 {
        self.available_balance
    }

    pub fn exceeds_balance(&self) -> bool {
        self.exceeds_balance
    }
}

/// Provides validated creation and removal of [`Expense`] records.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates form input against the ledger without mutating it.
    ///
    /// Checks run in form order: description, amount, category.
    pub fn add_expense(
        ledger: &Ledger,
        description: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<ExpenseCandidate, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = parse_decimal(amount_text)
            .filter(|amount| *amount > 0.0)
            .ok_or(ValidationError::InvalidAmount)?;
        let category =
            ExpenseCategory::from_label(category).ok_or(ValidationError::MissingCategory)?;

        let available_balance = ledger.available_balance();
        Ok(ExpenseCandidate {
            description: description.to_string(),
            amount,
            category,
            available_balance,
            exceeds_balance: amount > available_balance,
        })
    }

    /// Records a candidate with a fresh identifier and the clock's current date.
    pub fn commit_expense(
        ledger: &mut Ledger,
        candidate: ExpenseCandidate,
        clock: &dyn Clock,
    ) -> Expense {
        let expense = Expense::new(
            candidate.description,
            candidate.amount,
            candidate.category,
            clock.today(),
        );
        tracing::debug!(
            id = %expense.id,
            amount = expense.amount,
            category = %expense.category,
            overridden = candidate.exceeds_balance,
            "expense committed"
        );
        ledger.record(expense.clone());
        expense
    }

    /// Removes the expense with `id`, returning whether anything was removed.
    pub fn delete_expense(ledger: &mut Ledger, id: Uuid) -> bool {
        match ledger.remove(id) {
            Some(expense) => {
                tracing::debug!(%id, expense = %expense.display_label(), "expense deleted");
                true
            }
            None => false,
        }
    }
}

/// Parses user-entered decimal text, rejecting non-finite values.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
