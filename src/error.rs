// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed inventory data: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Outcomes of inventory operations that leave the stock untouched,
/// plus persistence failures that must not be swallowed.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{0} not found in inventory")]
    NotFound(String),
    #[error("{0} is not available in the inventory")]
    Unavailable(String),
    #[error("only {available} {fruit}(s) available")]
    InsufficientStock { fruit: String, available: i64 },
    #[error("total for {quantity} {fruit}(s) is too large")]
    TotalOverflow { fruit: String, quantity: i64 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a whole number, got {0:?}")]
    NotANumber(String),
    #[error("expected a price, got {0:?}")]
    NotAPrice(String),
    #[error("fruit name must not be empty")]
    EmptyName,
    #[error("input closed")]
    Closed,
}

/// Anything that interrupts a menu action: bad input, a broken terminal,
/// or a failed save.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
