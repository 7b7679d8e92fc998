#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records spending against a monthly income and savings
//! budget, persists it locally and warns before an entry overdraws the budget.

pub mod clock;
pub mod errors;
pub mod session;
pub mod utils;

pub use expense_config as config;
pub use expense_core as services;
pub use expense_domain as domain;
pub use expense_storage_json as storage;

pub use clock::SystemClock;
pub use errors::{Result, TrackerError};
pub use session::{ExpenseSession, SubmitOutcome};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the configured filter and emits a startup info log.
pub fn init(config: &config::Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        tracing::info!("Expense tracker tracing initialized.");
    });
}
