#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use expense_tracker::{
    config::Config,
    services::{Clock, KeyValueStore, StoreError},
    storage::MemoryStore,
    ExpenseSession,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config pointing at a unique temporary data directory.
pub fn temp_config() -> Config {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    Config {
        data_dir: Some(base.join("records")),
        ..Config::default()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> Box<dyn Clock> {
    Box::new(FixedClock(
        Utc.with_ymd_and_hms(2025, 4, 2, 18, 45, 0).unwrap(),
    ))
}

pub fn memory_session() -> ExpenseSession<MemoryStore> {
    ExpenseSession::open_with_clock(MemoryStore::new(), fixed_clock())
}

/// Store that accepts reads but refuses every write.
#[derive(Default)]
pub struct BrokenStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}
