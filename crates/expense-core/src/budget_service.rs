//! Validated replacement of the monthly budget.

use expense_domain::{BudgetConfig, Ledger};

use crate::{expense_service::parse_decimal, ValidationError};

/// Stateless budgeting utilities that operate over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Parses and validates both figures, replacing the ledger budget only when all checks pass.
    pub fn update_budget(
        ledger: &mut Ledger,
        salary_text: &str,
        savings_text: &str,
    ) -> Result<BudgetConfig, ValidationError> {
        let budget = Self::validate(salary_text, savings_text)?;
        ledger.set_budget(budget);
        tracing::debug!(
            salary = budget.salary,
            savings = budget.savings,
            "budget updated"
        );
        Ok(budget)
    }

    /// Builds a [`BudgetConfig`] from form text without touching any ledger.
    pub fn validate(salary_text: &str, savings_text: &str) -> Result<BudgetConfig, ValidationError> {
        let salary = parse_decimal(salary_text)
            .filter(|salary| *salary > 0.0)
            .ok_or(ValidationError::InvalidSalary)?;
        let savings = parse_decimal(savings_text)
            .filter(|savings| *savings >= 0.0)
            .ok_or(ValidationError::InvalidSavings)?;
        if savings > salary {
            return Err(ValidationError::SavingsExceedSalary);
        }
        Ok(BudgetConfig::new(salary, savings))
    }
}
