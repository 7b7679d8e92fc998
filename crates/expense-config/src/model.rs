use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "expense-tracker";

/// Stores where the tracker keeps its records and how it logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the record files. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub pretty_records: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: Self::default_log_filter(),
            pretty_records: false,
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        "expense_tracker=info".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR_NAME)
    }
}
