// src/storage/json_file.rs
use crate::error::StoreError;
use crate::storage::traits::{InventoryStore, Loaded};
use crate::types::Inventory;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Stores the whole inventory as one JSON object:
/// `{"apple": {"quantity": 15, "price": 3.00}}`
/// Prices are written as exact JSON numbers, never through `f64`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Inventory>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let inventory = serde_json::from_str::<Inventory>(&data).map_err(StoreError::Malformed)?;
        Ok(Some(inventory))
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Loaded {
        match self.read() {
            Ok(Some(inventory)) => {
                info!(
                    "Restored {} inventory entries from {}",
                    inventory.len(),
                    self.path.display()
                );
                Loaded::clean(inventory)
            }
            Ok(None) => {
                info!(
                    "No inventory file at {}, starting empty",
                    self.path.display()
                );
                Loaded::clean(Inventory::new())
            }
            Err(e) => {
                warn!("Discarding unreadable inventory: {}", e);
                Loaded::recovered(e)
            }
        }
    }

    fn save(&mut self, inventory: &Inventory) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(inventory).map_err(StoreError::Encode)?;
        fs::write(&self.path, data).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "Saved {} inventory entries to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InventoryEntry;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert("apple".to_string(), InventoryEntry::new(15, dec("3.00")));
        inventory.insert("banana".to_string(), InventoryEntry::new(40, dec("0.25")));
        inventory.insert("kiwi".to_string(), InventoryEntry::new(-3, dec("1.1")));
        inventory
    }

    #[test]
    fn missing_file_loads_empty_without_warning() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let loaded = store.load();
        assert!(loaded.inventory.is_empty());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));
        let inventory = sample();

        store.save(&inventory).unwrap();
        let loaded = JsonFileStore::new(store.path()).load();

        assert!(loaded.warning.is_none());
        assert_eq!(loaded.inventory, inventory);
    }

    #[test]
    fn high_precision_prices_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));
        let mut inventory = Inventory::new();
        inventory.insert(
            "lychee".to_string(),
            InventoryEntry::new(3, dec("0.12345678901234567891")),
        );

        store.save(&inventory).unwrap();
        let loaded = store.load();

        assert!(loaded.warning.is_none());
        assert_eq!(loaded.inventory["lychee"].price.to_string(), "0.12345678901234567891");
    }

    #[test]
    fn extreme_price_does_not_poison_the_file() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));
        let mut inventory = Inventory::new();
        inventory.insert("apple".to_string(), InventoryEntry::new(1, Decimal::MAX));
        inventory.insert("pear".to_string(), InventoryEntry::new(5, Decimal::ONE));

        store.save(&inventory).unwrap();
        let loaded = store.load();

        assert!(loaded.warning.is_none());
        assert_eq!(loaded.inventory, inventory);
        assert_eq!(loaded.inventory["apple"].price, Decimal::MAX);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));
        store.save(&sample()).unwrap();

        let mut smaller = Inventory::new();
        smaller.insert("pear".to_string(), InventoryEntry::new(2, dec("0.80")));
        store.save(&smaller).unwrap();

        assert_eq!(store.load().inventory, smaller);
    }

    #[test]
    fn reads_numeric_prices_written_by_other_tools() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(
            &path,
            r#"{"apple": {"quantity": 10, "price": 2.5}, "fig": {"quantity": 1, "price": 4}}"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load();
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.inventory["apple"], InventoryEntry::new(10, dec("2.5")));
        assert_eq!(loaded.inventory["fig"], InventoryEntry::new(1, dec("4")));
    }

    #[test]
    fn prices_are_written_as_json_numbers() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));
        store.save(&sample()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(raw["apple"]["price"].is_number());
        assert_eq!(raw["apple"]["quantity"], 15);
    }

    #[test]
    fn malformed_file_loads_empty_with_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{not json").unwrap();

        let loaded = JsonFileStore::new(&path).load();
        assert!(loaded.inventory.is_empty());
        assert!(matches!(loaded.warning, Some(StoreError::Malformed(_))));
    }

    #[test]
    fn wrong_shape_counts_as_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": 10}"#).unwrap();

        let loaded = JsonFileStore::new(&path).load();
        assert!(loaded.inventory.is_empty());
        assert!(matches!(loaded.warning, Some(StoreError::Malformed(_))));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("no_such_dir").join("inventory.json"));

        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
