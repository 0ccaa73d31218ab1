//! Runtime configuration
//!
//! Resolves where state slices live and which sound inventory to use.

use crate::inventory::{SoundInventory, loader};
use crate::persistence::FileStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default state directory, relative to the working directory
pub const DEFAULT_STATE_DIR: &str = ".pseudoword";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub state_dir: PathBuf,
    /// Custom inventory file; the built-in en-US inventory when `None`
    pub inventory_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            inventory_path: None,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn new(state_dir: Option<PathBuf>, inventory_path: Option<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR)),
            inventory_path,
        }
    }

    /// Load the configured inventory
    ///
    /// # Errors
    /// Returns an error if the inventory file cannot be read or parsed.
    pub fn load_inventory(&self) -> Result<SoundInventory> {
        match &self.inventory_path {
            Some(path) => loader::load_from_file(path)
                .with_context(|| format!("failed to load inventory from {}", path.display())),
            None => SoundInventory::en_us().context("built-in inventory is invalid"),
        }
    }

    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_local_state_dir() {
        let config = AppConfig::new(None, None);
        assert_eq!(config.state_dir, PathBuf::from(".pseudoword"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn loads_builtin_inventory() {
        let inventory = AppConfig::default().load_inventory().unwrap();
        assert!(inventory.find("p").is_some());
    }

    #[test]
    fn loads_custom_inventory() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"consonants":{{"plosive":[{{"sound":"p","letters":["p"]}}]}},"vowels":{{"front":[{{"sound":"i","letters":["ee"]}}]}}}}"#
        )
        .unwrap();

        let config = AppConfig::new(None, Some(file.path().to_path_buf()));
        let inventory = config.load_inventory().unwrap();
        assert_eq!(inventory.all_sounds().len(), 2);
    }

    #[test]
    fn missing_inventory_file_errors() {
        let config = AppConfig::new(None, Some(PathBuf::from("/nonexistent/inventory.json")));
        let err = config.load_inventory().unwrap_err();
        assert!(err.to_string().contains("failed to load inventory"));
    }
}
