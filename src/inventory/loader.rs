//! Inventory loading utilities
//!
//! Parses inventories from JSON text or files.

use super::{InventoryError, SoundInventory};
use std::fs;
use std::path::Path;

/// Parse an inventory from JSON text
///
/// # Errors
///
/// Returns `InventoryError::Json` if the text is not a valid inventory.
pub fn from_json_str(json: &str) -> Result<SoundInventory, InventoryError> {
    Ok(serde_json::from_str(json)?)
}

/// Load an inventory from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid inventory.
///
/// # Examples
/// ```no_run
/// use pseudoword::inventory::loader::load_from_file;
///
/// let inventory = load_from_file("data/en-us.json").unwrap();
/// println!("Loaded {} consonants", inventory.all_consonants().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SoundInventory, InventoryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"{
        "consonants": { "plosive": [{ "sound": "p", "letters": ["p"] }] },
        "vowels": { "front": [{ "sound": "i", "letters": ["ee"] }] },
        "diphthongs": [],
        "restrictions": { "p": ["i"] }
    }"#;

    #[test]
    fn parses_partial_inventory() {
        let inventory = from_json_str(SMALL).unwrap();
        assert_eq!(inventory.all_consonants().len(), 1);
        assert_eq!(inventory.all_vowels().len(), 1);
        assert!(inventory.all_diphthongs().is_empty());
        assert!(inventory.restrictions().is_forbidden("p", "i"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            from_json_str("{ not json"),
            Err(InventoryError::Json(_))
        ));
    }

    #[test]
    fn rejects_sound_without_spellings() {
        let json = r#"{ "consonants": { "plosive": [{ "sound": "p", "letters": [] }] } }"#;
        assert!(from_json_str(json).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let inventory = load_from_file(file.path()).unwrap();
        assert_eq!(inventory.all_sounds().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/inventory.json");
        assert!(matches!(result, Err(InventoryError::Io { .. })));
    }
}
