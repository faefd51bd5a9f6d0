// src/main.rs
use crate::cli::App;
use crate::config::AppConfig;
use crate::core::manager::InventoryManager;
use crate::storage::json_file::JsonFileStore;
use anyhow::Context;
use dotenvy::dotenv;
use std::io;
use tracing::{error, info};

mod cli;
mod config;
mod core;
mod error;
mod logging;
mod storage;
mod types;
mod utils;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Load Configuration
    let config = AppConfig::new().context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&config)?;

    info!(
        "Fruit store starting, inventory file: {}",
        config.inventory_file.display()
    );

    // 2. Initialize Components
    let store = JsonFileStore::new(&config.inventory_file);
    let manager = InventoryManager::new(store);

    // 3. Run the menus until the user exits
    let stdin = io::stdin();
    let mut app = App::new(manager, stdin.lock(), io::stdout());

    if let Err(e) = app.run() {
        error!("Fatal: {:#}", e);
        return Err(e);
    }

    Ok(())
}
