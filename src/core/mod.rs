pub mod manager;
pub mod purchase;
