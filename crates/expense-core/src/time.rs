use chrono::{DateTime, NaiveDate, Utc};

/// Time source for stamping committed expenses.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date recorded on new expenses (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
