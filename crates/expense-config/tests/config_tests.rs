use std::fs;

use expense_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_platform_data_dir() {
    let cfg = Config::default();

    assert!(cfg.data_dir.is_none());
    assert_eq!(cfg.log_filter, "expense_tracker=info");
    assert!(cfg.resolve_data_dir().ends_with("expense-tracker"));
}

#[test]
fn explicit_data_dir_wins() {
    let dir = tempdir().expect("tempdir");
    let cfg = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    assert_eq!(cfg.resolve_data_dir(), dir.path());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load default"), Config::default());

    let cfg = Config {
        data_dir: Some(dir.path().join("records")),
        log_filter: "expense_tracker=debug".into(),
        pretty_records: true,
    };
    manager.save(&cfg).expect("save config");

    assert_eq!(manager.load().expect("load config"), cfg);
    assert!(manager.config_path().exists());
}

#[test]
fn missing_fields_take_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    fs::write(manager.config_path(), "{}").unwrap();

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    fs::write(manager.config_path(), "{ nope").unwrap();

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn update_edits_the_stored_document() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let updated = manager
        .update(|cfg| cfg.pretty_records = true)
        .expect("update config");

    assert!(updated.pretty_records);
    assert_eq!(manager.load().expect("reload"), updated);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}
