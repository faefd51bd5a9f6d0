// src/core/manager.rs
use crate::error::{InventoryError, StoreError};
use crate::storage::traits::InventoryStore;
use crate::types::{Inventory, InventoryEntry, InventoryView, StockLine};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Owns the in-memory stock and the store it is written through to.
/// Every successful mutation persists the whole inventory before returning.
pub struct InventoryManager<S> {
    store: S,
    inventory: Inventory,
    load_warning: Option<StoreError>,
}

impl<S> InventoryManager<S>
where
    S: InventoryStore,
{
    pub fn new(store: S) -> Self {
        let loaded = store.load();
        if let Some(e) = &loaded.warning {
            warn!("Starting with an empty inventory: {}", e);
        }
        Self {
            store,
            inventory: loaded.inventory,
            load_warning: loaded.warning,
        }
    }

    /// Problem encountered while loading, if the inventory had to be reset.
    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    #[cfg(test)]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&InventoryEntry> {
        self.inventory.get(name)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds stock. An existing entry accumulates quantity and takes the new price.
    pub fn add_fruit(
        &mut self,
        name: &str,
        quantity: i64,
        price: Decimal,
    ) -> Result<InventoryEntry, InventoryError> {
        let entry = self
            .inventory
            .entry(name.to_string())
            .and_modify(|e| {
                e.quantity = e.quantity.saturating_add(quantity);
                e.price = price;
            })
            .or_insert(InventoryEntry::new(quantity, price));
        let entry = *entry;

        info!("Added {} x {} @ {} (now {})", quantity, name, price, entry.quantity);
        self.persist()?;
        Ok(entry)
    }

    pub fn view(&self) -> InventoryView {
        if self.inventory.is_empty() {
            return InventoryView::Empty;
        }
        let lines = self
            .inventory
            .iter()
            .map(|(name, e)| StockLine {
                name: name.clone(),
                quantity: e.quantity,
                price: e.price,
            })
            .collect();
        InventoryView::Stock(lines)
    }

    /// Adjusts quantity by `delta`. No floor is applied and an entry that
    /// reaches zero is kept.
    pub fn update_quantity(
        &mut self,
        name: &str,
        delta: i64,
    ) -> Result<InventoryEntry, InventoryError> {
        let entry = self
            .inventory
            .get_mut(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        entry.quantity = entry.quantity.saturating_add(delta);
        let entry = *entry;

        info!("Adjusted {} by {} (now {})", name, delta, entry.quantity);
        self.persist()?;
        Ok(entry)
    }

    pub fn remove_fruit(&mut self, name: &str) -> Result<InventoryEntry, InventoryError> {
        let removed = self
            .inventory
            .remove(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;

        info!("Removed {} from inventory", name);
        self.persist()?;
        Ok(removed)
    }

    /// Mutable access for composed operations living in this module tree.
    /// Callers must follow up with `persist` or `remove_fruit`.
    pub(super) fn entry_mut(&mut self, name: &str) -> Option<&mut InventoryEntry> {
        self.inventory.get_mut(name)
    }

    pub(super) fn persist(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.inventory)
    }
}
