// src/types.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal, // Per unit
}

impl InventoryEntry {
    pub fn new(quantity: i64, price: Decimal) -> Self {
        Self { quantity, price }
    }
}

/// Fruit name -> entry. Ordered so that stock listings are stable.
pub type Inventory = BTreeMap<String, InventoryEntry>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryView {
    Empty,
    Stock(Vec<StockLine>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub fruit: String,
    pub quantity: i64,
    pub total: Decimal,
}
