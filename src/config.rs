// Mon Oct 19 2026 - Alex

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{DEFAULT_PLAYERS, MAX_PLAYERS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_ids: Vec<u8>,
    pub locations_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_ids: DEFAULT_PLAYERS.to_vec(),
            locations_file: PathBuf::from("Locations.txt"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player_ids(mut self, player_ids: Vec<u8>) -> Self {
        self.player_ids = player_ids;
        self
    }

    pub fn with_locations_file(mut self, path: PathBuf) -> Self {
        self.locations_file = path;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_ids.is_empty() {
            return Err(ConfigError::Validation("player_ids must not be empty".to_string()));
        }
        if let Some(id) = self.player_ids.iter().find(|&&id| id >= MAX_PLAYERS) {
            return Err(ConfigError::Validation(format!(
                "player id {} out of range (0..{})",
                id, MAX_PLAYERS
            )));
        }
        let mut seen = [false; MAX_PLAYERS as usize];
        for &id in &self.player_ids {
            if std::mem::replace(&mut seen[id as usize], true) {
                return Err(ConfigError::Validation(format!("player id {} listed twice", id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.player_ids, vec![0, 1, 2, 3]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ids() {
        assert!(Config::new().with_player_ids(vec![]).validate().is_err());
        assert!(Config::new().with_player_ids(vec![0, 4]).validate().is_err());
        assert!(Config::new().with_player_ids(vec![1, 1]).validate().is_err());
        assert!(Config::new().with_player_ids(vec![3, 1]).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"player_ids": [0, 1]}"#).unwrap();
        assert_eq!(config.player_ids, vec![0, 1]);
        assert_eq!(config.locations_file, PathBuf::from("Locations.txt"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("melee-state-decoder-{}.json", std::process::id()));
        let config = Config::new().with_player_ids(vec![2]).with_log_level("debug");
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("melee-state-decoder-{}.yaml", std::process::id()));
        fs::write(&path, "player_ids: [0]").unwrap();
        let result = Config::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
