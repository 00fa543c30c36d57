//! Path management for cashbook
//!
//! ## Path Resolution Order
//!
//! 1. `CASHBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `cashbook`
//!    (`~/.config/cashbook` on Linux, `%APPDATA%\cashbook` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::CashbookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CASHBOOK_DATA_DIR";

/// Manages all paths used by cashbook
#[derive(Debug, Clone)]
pub struct CashbookPaths {
    base_dir: PathBuf,
}

impl CashbookPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashbookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CashbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path to the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("cashbook.json")
    }

    pub fn ensure_directories(&self) -> Result<(), CashbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashbookError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, CashbookError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CashbookError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("cashbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.ledger_file(), temp_dir.path().join("cashbook.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().join("nested").join("cashbook"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().is_dir());
        assert!(!paths.settings_file().exists());
    }
}
