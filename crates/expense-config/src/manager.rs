use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";
const STAGING_EXTENSION: &str = "json.tmp";

/// Reads and writes the tracker [`Config`] as a single JSON document.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Keeps the document at `<base>/config/config.json`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let dir = base.join("config");
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored config, or the defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.config_path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| ConfigError::Serde(err.to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the stored document. The previous one survives a failed write.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let document = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let staging = self.config_path.with_extension(STAGING_EXTENSION);
        fs::write(&staging, document)?;
        fs::rename(&staging, &self.config_path)?;
        Ok(())
    }

    /// Loads, applies `edit` and saves, returning the saved config.
    pub fn update<F>(&self, edit: F) -> Result<Config, ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        edit(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}
