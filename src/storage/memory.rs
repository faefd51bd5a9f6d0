// src/storage/memory.rs
use crate::error::StoreError;
use crate::storage::traits::{InventoryStore, Loaded};
use crate::types::Inventory;
use std::io;
use std::path::PathBuf;

/// Keeps the last saved snapshot in memory. Can be switched into a
/// failing mode to simulate an unwritable destination, or a corrupt mode
/// to simulate unreadable persisted data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<Inventory>,
    saves: usize,
    fail_saves: bool,
    corrupt: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            snapshot: Some(inventory),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Option<&Inventory> {
        self.snapshot.as_ref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> Loaded {
        if self.corrupt {
            let e = serde_json::from_str::<Inventory>("{not json").unwrap_err();
            return Loaded::recovered(StoreError::Malformed(e));
        }
        Loaded::clean(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.snapshot = Some(inventory.clone());
        self.saves += 1;
        Ok(())
    }
}
