use chrono::{DateTime, Utc};

use expense_core::Clock;

/// Wall-clock time, used by sessions unless a test clock is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
