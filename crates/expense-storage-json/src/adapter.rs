//! Load and write-through of tracker state over a [`KeyValueStore`].

use expense_core::{KeyValueStore, PersistenceError};
use expense_domain::{BudgetConfig, CurrencyChoice, Expense, Ledger};

use crate::records::{self, CURRENCY_KEY, EXPENSES_KEY, SALARY_KEY, SAVINGS_KEY};

/// State recovered by [`PersistenceAdapter::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    pub expenses: Vec<Expense>,
    pub currency: CurrencyChoice,
    pub budget: BudgetConfig,
    /// Records that were present but unusable and fell back to defaults.
    pub recovered: Vec<PersistenceError>,
}

impl LoadedState {
    pub fn into_ledger(self) -> (Ledger, CurrencyChoice) {
        (Ledger::with_expenses(self.expenses, self.budget), self.currency)
    }
}

impl Default for LoadedState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            currency: CurrencyChoice::default(),
            budget: BudgetConfig::default(),
            recovered: Vec::new(),
        }
    }
}

/// One logical mutation to persist. Each variant is written independently.
#[derive(Debug, Clone, Copy)]
pub enum StateChange<'a> {
    Expenses(&'a [Expense]),
    Currency(&'a CurrencyChoice),
    Budget(&'a BudgetConfig),
}

impl StateChange<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            StateChange::Expenses(_) => EXPENSES_KEY,
            StateChange::Currency(_) => CURRENCY_KEY,
            StateChange::Budget(_) => "budget",
        }
    }
}

/// Reads and writes the `expenses`, `selectedCurrency`, `salary` and `savings` records.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S> {
    store: S,
    pretty: bool,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pretty: false,
        }
    }

    /// Pretty-prints JSON records on write.
    pub fn with_pretty_records(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads every record independently; a bad record never blocks the others.
    pub fn load(&self) -> LoadedState {
        let mut recovered = Vec::new();

        let expenses = self
            .read(EXPENSES_KEY, &mut recovered, records::decode_expenses)
            .unwrap_or_default();
        let currency = self
            .read(CURRENCY_KEY, &mut recovered, records::decode_currency)
            .unwrap_or_default();
        let salary = self
            .read(SALARY_KEY, &mut recovered, records::decode_salary)
            .unwrap_or(BudgetConfig::DEFAULT_SALARY);
        let mut savings = self
            .read(SAVINGS_KEY, &mut recovered, records::decode_savings)
            .unwrap_or(BudgetConfig::DEFAULT_SAVINGS);

        if savings > salary {
            let error = PersistenceError::read_malformed(
                SAVINGS_KEY,
                format!("savings {savings} exceeds salary {salary}"),
            );
            tracing::warn!(%error, "falling back to default savings");
            recovered.push(error);
            savings = BudgetConfig::DEFAULT_SAVINGS.min(salary);
        }

        tracing::debug!(
            expenses = expenses.len(),
            currency = currency.code,
            recovered = recovered.len(),
            "tracker state loaded"
        );
        LoadedState {
            expenses,
            currency,
            budget: BudgetConfig::new(salary, savings),
            recovered,
        }
    }

    /// Writes one change through to the store.
    ///
    /// Failures are logged and swallowed; the return value reports whether the
    /// record landed.
    pub fn save(&mut self, change: StateChange<'_>) -> bool {
        match self.write(change) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(%error, change = change.label(), "write-through failed");
                false
            }
        }
    }

    /// Persists the whole state as three independent writes.
    pub fn save_all(&mut self, ledger: &Ledger, currency: &CurrencyChoice) -> bool {
        let expenses = self.save(StateChange::Expenses(ledger.expenses()));
        let currency = self.save(StateChange::Currency(currency));
        let budget = self.save(StateChange::Budget(ledger.budget()));
        expenses && currency && budget
    }

    fn write(&mut self, change: StateChange<'_>) -> Result<(), PersistenceError> {
        match change {
            StateChange::Expenses(expenses) => {
                let raw = records::encode_expenses(expenses, self.pretty)
                    .map_err(|err| PersistenceError::write_failed(EXPENSES_KEY, err))?;
                self.put(EXPENSES_KEY, &raw)
            }
            StateChange::Currency(currency) => {
                let raw = records::encode_currency(currency, self.pretty)
                    .map_err(|err| PersistenceError::write_failed(CURRENCY_KEY, err))?;
                self.put(CURRENCY_KEY, &raw)
            }
            StateChange::Budget(budget) => {
                self.put(SALARY_KEY, &records::encode_decimal(budget.salary))?;
                self.put(SAVINGS_KEY, &records::encode_decimal(budget.savings))
            }
        }
    }

    fn put(&mut self, key: &str, raw: &str) -> Result<(), PersistenceError> {
        self.store
            .set(key, raw)
            .map_err(|err| PersistenceError::write_failed(key, err))
    }

    fn read<T>(
        &self,
        key: &str,
        recovered: &mut Vec<PersistenceError>,
        decode: impl FnOnce(&str) -> Result<T, String>,
    ) -> Option<T> {
        let outcome = match self.store.get(key) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => return None,
            Err(err) => Err(err.to_string()),
        };
        match outcome {
            Ok(value) => Some(value),
            Err(reason) => {
                let error = PersistenceError::read_malformed(key, reason);
                tracing::warn!(%error, "falling back to default");
                recovered.push(error);
                None
            }
        }
    }
}
