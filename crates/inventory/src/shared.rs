//! Thread-safe handle around an [`Inventory`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sweetshop_core::{InventoryResult, SweetId};

use crate::inventory::Inventory;
use crate::query::{SearchQuery, SortKey, SortOrder};
use crate::sweet::Sweet;

/// Single-writer/multi-reader handle for hosts that share one catalog
/// between threads.
///
/// Mutations (add/delete/purchase/restock) take the write lock, reads
/// (list/search/sort) the read lock. Clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl SharedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation validates before it touches state, so a poisoned lock
    // still guards a consistent catalog.
    fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, sweet: Sweet) -> InventoryResult<()> {
        self.write().add(sweet)
    }

    pub fn delete(&self, id: SweetId) -> InventoryResult<Sweet> {
        self.write().delete(id)
    }

    pub fn purchase(&self, id: SweetId, quantity: u32) -> InventoryResult<()> {
        self.write().purchase(id, quantity)
    }

    pub fn restock(&self, id: SweetId, quantity: u32) -> InventoryResult<()> {
        self.write().restock(id, quantity)
    }

    pub fn get(&self, id: SweetId) -> Option<Sweet> {
        self.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn list(&self) -> Vec<Sweet> {
        self.read().list()
    }

    pub fn search(&self, query: &SearchQuery) -> InventoryResult<Vec<Sweet>> {
        self.read().search(query)
    }

    pub fn sort(&self, key: SortKey, order: SortOrder) -> Vec<Sweet> {
        self.read().sort(key, order)
    }

    /// Owned copy of the whole catalog.
    pub fn snapshot(&self) -> Inventory {
        self.read().clone()
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }
}
