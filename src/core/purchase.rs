// src/core/purchase.rs
use crate::core::manager::InventoryManager;
use crate::error::InventoryError;
use crate::storage::traits::InventoryStore;
use crate::types::Receipt;
use rust_decimal::Decimal;
use tracing::info;

/// Customer-facing purchases on top of a borrowed manager.
pub struct PurchaseService<'a, S> {
    manager: &'a mut InventoryManager<S>,
}

impl<'a, S> PurchaseService<'a, S>
where
    S: InventoryStore,
{
    pub fn new(manager: &'a mut InventoryManager<S>) -> Self {
        Self { manager }
    }

    /// Sells `quantity` units. Stock that drops to exactly zero is removed
    /// from the inventory; rejected purchases leave everything untouched.
    pub fn buy_fruit(&mut self, name: &str, quantity: i64) -> Result<Receipt, InventoryError> {
        let entry = self
            .manager
            .entry_mut(name)
            .ok_or_else(|| InventoryError::Unavailable(name.to_string()))?;

        if quantity > entry.quantity {
            return Err(InventoryError::InsufficientStock {
                fruit: name.to_string(),
                available: entry.quantity,
            });
        }

        let total = entry
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| InventoryError::TotalOverflow {
                fruit: name.to_string(),
                quantity,
            })?;
        entry.quantity = entry.quantity.saturating_sub(quantity);
        let remaining = entry.quantity;

        info!("Sold {} x {} for {} ({} left)", quantity, name, total, remaining);

        if remaining == 0 {
            self.manager.remove_fruit(name)?;
        } else {
            self.manager.persist()?;
        }

        Ok(Receipt {
            fruit: name.to_string(),
            quantity,
            total,
        })
    }
}
