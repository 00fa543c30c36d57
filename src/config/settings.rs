//! User settings for cashbook
//!
//! Currency prefix, ledger file location and removal confirmation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::CashbookPaths;
use crate::error::CashbookError;
use crate::storage::{read_json, write_json_atomic};

/// User settings for cashbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix printed before the balance
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file to use instead of the one in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Ask before removing a transaction
    #[serde(default = "default_confirm_removals")]
    pub confirm_removals: bool,
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_confirm_removals() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            ledger_file: None,
            confirm_removals: default_confirm_removals(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &CashbookPaths) -> Result<Self, CashbookError> {
        let settings: Option<Settings> = read_json(paths.settings_file()).map_err(|e| {
            CashbookError::Config(format!("Failed to load settings: {}", e))
        })?;

        // Don't save yet - let caller decide when to persist
        Ok(settings.unwrap_or_default())
    }

    pub fn save(&self, paths: &CashbookPaths) -> Result<(), CashbookError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The ledger file to open: the configured override, else the default
    pub fn ledger_path(&self, paths: &CashbookPaths) -> PathBuf {
        match &self.ledger_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert!(settings.confirm_removals);
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            ledger_file: Some(PathBuf::from("shop.json")),
            confirm_removals: false,
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.ledger_path(&paths), temp_dir.path().join("shop.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.confirm_removals);
        assert_eq!(loaded.ledger_path(&paths), paths.ledger_file());
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashbookError::Config(_)));
    }
}
