//! The explicitly owned tracker session.
//!
//! An [`ExpenseSession`] holds the ledger, the selected display currency and the
//! persistence adapter. Every mutation is applied in memory first, then written
//! through to the store before the call returns. Write failures are logged by
//! the adapter and never undo the in-memory change.

use uuid::Uuid;

use expense_config::{Config, ConfigManager};
use expense_core::{
    budget_alert_message, BudgetService, Clock, ExpenseCandidate, ExpenseService, KeyValueStore,
    LedgerSummary, PersistenceError, SummaryService, ValidationError,
};
use expense_domain::{BudgetConfig, CurrencyChoice, Expense, Ledger};
use expense_storage_json::{JsonFileStore, PersistenceAdapter, StateChange};

use crate::{clock::SystemClock, errors::Result};

/// Result of submitting the expense form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Recorded and persisted.
    Committed(Expense),
    /// Valid, but larger than the available balance. Pass the candidate to
    /// [`ExpenseSession::confirm_expense`] to record it anyway.
    NeedsConfirmation(ExpenseCandidate),
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }
}

pub struct ExpenseSession<S> {
    ledger: Ledger,
    currency: CurrencyChoice,
    adapter: PersistenceAdapter<S>,
    clock: Box<dyn Clock>,
    recovered: Vec<PersistenceError>,
}

impl<S: KeyValueStore> ExpenseSession<S> {
    /// Loads state from `store`, falling back to defaults record by record.
    pub fn open(store: S) -> Self {
        Self::open_with_clock(store, Box::new(SystemClock))
    }

    pub fn open_with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self::from_adapter(PersistenceAdapter::new(store), clock)
    }

    fn from_adapter(adapter: PersistenceAdapter<S>, clock: Box<dyn Clock>) -> Self {
        let state = adapter.load();
        let recovered = state.recovered.clone();
        let (ledger, currency) = state.into_ledger();
        tracing::info!(
            expenses = ledger.len(),
            currency = currency.code,
            recovered = recovered.len(),
            "expense session opened"
        );
        Self {
            ledger,
            currency,
            adapter,
            clock,
            recovered,
        }
    }

    /// Validates the form and commits straight away unless the amount exceeds the balance.
    pub fn submit_expense(
        &mut self,
        description: &str,
        amount_text: &str,
        category: &str,
    ) -> SubmitOutcome {
        match ExpenseService::add_expense(&self.ledger, description, amount_text, category) {
            Err(reason) => SubmitOutcome::Rejected(reason),
            Ok(candidate) if candidate.exceeds_balance() => {
                tracing::debug!(
                    amount = candidate.amount(),
                    available = candidate.available_balance(),
                    "expense exceeds available balance"
                );
                SubmitOutcome::NeedsConfirmation(candidate)
            }
            Ok(candidate) => SubmitOutcome::Committed(self.commit(candidate)),
        }
    }

    /// Records a candidate the user chose to add despite the balance warning.
    pub fn confirm_expense(&mut self, candidate: ExpenseCandidate) -> Expense {
        self.commit(candidate)
    }

    pub fn delete_expense(&mut self, id: Uuid) -> bool {
        let removed = ExpenseService::delete_expense(&mut self.ledger, id);
        if removed {
            self.adapter
                .save(StateChange::Expenses(self.ledger.expenses()));
        }
        removed
    }

    pub fn update_budget(
        &mut self,
        salary_text: &str,
        savings_text: &str,
    ) -> std::result::Result<BudgetConfig, ValidationError> {
        let budget = BudgetService::update_budget(&mut self.ledger, salary_text, savings_text)?;
        self.adapter.save(StateChange::Budget(&budget));
        Ok(budget)
    }

    /// Switches the display currency. Unknown codes leave the selection unchanged.
    pub fn select_currency(&mut self, code: &str) -> Option<CurrencyChoice> {
        let currency = CurrencyChoice::from_code(code)?;
        self.currency = currency;
        self.adapter.save(StateChange::Currency(&currency));
        Some(currency)
    }

    pub fn alert_message(&self, candidate: &ExpenseCandidate) -> String {
        budget_alert_message(&self.currency, candidate)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    pub fn budget(&self) -> &BudgetConfig {
        self.ledger.budget()
    }

    pub fn currency(&self) -> &CurrencyChoice {
        &self.currency
    }

    pub fn total_expenses(&self) -> f64 {
        self.ledger.total_expenses()
    }

    pub fn available_balance(&self) -> f64 {
        self.ledger.available_balance()
    }

    pub fn summary(&self) -> LedgerSummary {
        SummaryService::summarize(&self.ledger)
    }

    /// Records that were unusable at load time and replaced by defaults.
    pub fn recovered(&self) -> &[PersistenceError] {
        &self.recovered
    }

    pub fn store(&self) -> &S {
        self.adapter.store()
    }

    fn commit(&mut self, candidate: ExpenseCandidate) -> Expense {
        let expense =
            ExpenseService::commit_expense(&mut self.ledger, candidate, self.clock.as_ref());
        self.adapter
            .save(StateChange::Expenses(self.ledger.expenses()));
        expense
    }
}

impl ExpenseSession<JsonFileStore> {
    /// Opens the file-backed session under the configured data directory.
    pub fn open_from_config(config: &Config) -> Result<Self> {
        let store = JsonFileStore::new(config.resolve_data_dir())?;
        let adapter = PersistenceAdapter::new(store).with_pretty_records(config.pretty_records);
        Ok(Self::from_adapter(adapter, Box::new(SystemClock)))
    }

    /// Loads the config stored by `manager`, initializes tracing and opens the session.
    pub fn open_with_manager(manager: &ConfigManager) -> Result<Self> {
        let config = manager.load()?;
        crate::init(&config);
        Self::open_from_config(&config)
    }
}
