//! expense-storage-json
//!
//! Persistence adapter that keeps tracker state as four independent JSON
//! records in a key-value store, plus the in-memory and file-backed stores.

pub mod adapter;
pub mod file_store;
pub mod memory_store;
pub mod records;

pub use adapter::{LoadedState, PersistenceAdapter, StateChange};
pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use records::{CURRENCY_KEY, EXPENSES_KEY, SALARY_KEY, SAVINGS_KEY};
