//! Monthly income and savings goal.

use serde::{Deserialize, Serialize};

/// Salary and savings goal that bound monthly spending.
///
/// Invariant once validated: `salary > 0`, `0 <= savings <= salary`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    pub salary: f64,
    pub savings: f64,
}

impl BudgetConfig {
    pub const DEFAULT_SALARY: f64 = 10_000.0;
    pub const DEFAULT_SAVINGS: f64 = 2_000.0;

    pub fn new(salary: f64, savings: f64) -> Self {
        Self { salary, savings }
    }

    /// Income left for spending once the savings goal is set aside.
    pub fn disposable(&self) -> f64 {
        self.salary - self.savings
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SALARY, Self::DEFAULT_SAVINGS)
    }
}
