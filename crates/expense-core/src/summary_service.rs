use expense_domain::Ledger;

/// Every figure the income and budget panel renders, taken at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSummary {
    pub salary: f64,
    pub savings: f64,
    pub total_expenses: f64,
    pub available_balance: f64,
    pub expense_count: usize,
    pub overdrawn: bool,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        let budget = ledger.budget();
        let total_expenses = ledger.total_expenses();
        let available_balance = budget.disposable() - total_expenses;
        LedgerSummary {
            salary: budget.salary,
            savings: budget.savings,
            total_expenses,
            available_balance,
            expense_count: ledger.len(),
            overdrawn: available_balance < 0.0,
        }
    }
}
