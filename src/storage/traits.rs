// src/storage/traits.rs
use crate::error::StoreError;
use crate::types::Inventory;

/// Result of reading persisted stock. Loading never fails outright:
/// unreadable or malformed data yields an empty inventory and a warning.
#[derive(Debug)]
pub struct Loaded {
    pub inventory: Inventory,
    pub warning: Option<StoreError>,
}

impl Loaded {
    pub fn clean(inventory: Inventory) -> Self {
        Self {
            inventory,
            warning: None,
        }
    }

    pub fn recovered(warning: StoreError) -> Self {
        Self {
            inventory: Inventory::new(),
            warning: Some(warning),
        }
    }
}

pub trait InventoryStore {
    fn load(&self) -> Loaded;

    // Replaces everything previously persisted
    fn save(&mut self, inventory: &Inventory) -> Result<(), StoreError>;
}
