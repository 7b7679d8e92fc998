//! In-memory owner of expense records and the budget configuration.

use uuid::Uuid;

use crate::{
    budget::BudgetConfig,
    common::{total_amount, Identifiable},
    expense::Expense,
};

/// Ordered expense collection plus the budget it is measured against.
///
/// Expenses are only reachable as a slice; they can be appended or removed
/// whole but never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    budget: BudgetConfig,
}

impl Ledger {
    pub fn new(budget: BudgetConfig) -> Self {
        Self {
            expenses: Vec::new(),
            budget,
        }
    }

    pub fn with_expenses(expenses: Vec<Expense>, budget: BudgetConfig) -> Self {
        Self { expenses, budget }
    }

    /// Expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    /// Appends an expense at the end of the collection.
    pub fn record(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes the first expense with `id`, returning it when present.
    pub fn remove(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id() == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn set_budget(&mut self, budget: BudgetConfig) {
        self.budget = budget;
    }

    pub fn total_expenses(&self) -> f64 {
        total_amount(&self.expenses)
    }

    /// `salary - savings - total_expenses`; negative once overspent.
    pub fn available_balance(&self) -> f64 {
        self.budget.disposable() - self.total_expenses()
    }
}
