//! expense-core
//!
//! Business rules for the expense tracker: validation, the two-phase
//! add/commit flow, budget updates, summaries and display contracts.
//! Depends on expense-domain. No terminal I/O, no direct storage interactions.

pub mod budget_service;
pub mod error;
pub mod expense_service;
pub mod format;
pub mod store;
pub mod summary_service;
pub mod time;

pub use budget_service::*;
pub use error::{PersistenceError, StoreError, ValidationError};
pub use expense_service::*;
pub use format::*;
pub use store::KeyValueStore;
pub use summary_service::*;
pub use time::Clock;
