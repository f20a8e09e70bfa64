//! Inventory domain module.
//!
//! This crate contains the business rules for the sweet shop catalog,
//! implemented purely as deterministic in-memory logic (no IO, no storage).

pub mod inventory;
pub mod query;
pub mod shared;
pub mod sweet;

pub use inventory::Inventory;
pub use query::{SearchQuery, SortKey, SortOrder};
pub use shared::SharedInventory;
pub use sweet::{Sweet, SweetRecord};

pub use sweetshop_core::{Entity, InventoryError, InventoryResult, SweetId};
