//! The shop's catalog: an ordered, identifier-unique collection of sweets.

use tracing::{debug, info};

use sweetshop_core::{Entity, InventoryError, InventoryResult, SweetId};

use crate::query::{SearchQuery, SortKey, SortOrder};
use crate::sweet::Sweet;

/// Ordered collection of sweets.
///
/// Insertion order is preserved and drives listing order and sort tie-breaks.
/// Every listing hands back an owned copy; the only in-place mutation of a
/// stored sweet is through [`Inventory::purchase`] and [`Inventory::restock`].
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    sweets: Vec<Sweet>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    pub fn contains(&self, id: SweetId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: SweetId) -> Option<&Sweet> {
        self.position(id).map(|idx| &self.sweets[idx])
    }

    // Linear scan; a shop catalog is small.
    fn position(&self, id: SweetId) -> Option<usize> {
        self.sweets.iter().position(|s| *s.id() == id)
    }

    fn position_or_not_found(&self, id: SweetId) -> InventoryResult<usize> {
        self.position(id).ok_or(InventoryError::NotFound(id.get()))
    }

    /// Append a sweet. Rejects a sweet whose identifier is already stocked,
    /// whatever its other fields.
    pub fn add(&mut self, sweet: Sweet) -> InventoryResult<()> {
        if self.sweets.iter().any(|s| s.same_identity(&sweet)) {
            return Err(InventoryError::DuplicateId(sweet.id().get()));
        }

        info!(sweet_id = %sweet.id(), name = sweet.name(), "sweet added");
        self.sweets.push(sweet);
        Ok(())
    }

    /// Remove the sweet with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: SweetId) -> InventoryResult<Sweet> {
        let idx = self.position_or_not_found(id)?;
        let removed = self.sweets.remove(idx);

        info!(sweet_id = %id, "sweet deleted");
        Ok(removed)
    }

    /// Snapshot of every sweet in insertion order.
    pub fn list(&self) -> Vec<Sweet> {
        self.sweets.clone()
    }

    /// Sweets matching every filter in `query`, in insertion order.
    pub fn search(&self, query: &SearchQuery) -> InventoryResult<Vec<Sweet>> {
        query.validate()?;

        let found: Vec<Sweet> = self
            .sweets
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();

        debug!(?query, matches = found.len(), "search completed");
        Ok(found)
    }

    /// Sorted copy of the catalog. The sort is stable in both directions, so
    /// sweets with equal keys keep their insertion order.
    pub fn sort(&self, key: SortKey, order: SortOrder) -> Vec<Sweet> {
        let mut sorted = self.sweets.clone();
        sorted.sort_by(|a, b| order.apply(key.compare(a, b)));

        debug!(%key, ?order, "sort completed");
        sorted
    }

    /// Sell `quantity` units of the sweet with `id`.
    pub fn purchase(&mut self, id: SweetId, quantity: u32) -> InventoryResult<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid_quantity(
                "purchase quantity must be positive",
            ));
        }
        let idx = self.position_or_not_found(id)?;
        let remaining = self.sweets[idx].take_stock(quantity)?;

        info!(sweet_id = %id, quantity, remaining, "sweet purchased");
        Ok(())
    }

    /// Add `quantity` units to the sweet with `id`.
    pub fn restock(&mut self, id: SweetId, quantity: u32) -> InventoryResult<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid_quantity(
                "restock quantity must be positive",
            ));
        }
        let idx = self.position_or_not_found(id)?;
        let stock = self.sweets[idx].add_stock(quantity)?;

        info!(sweet_id = %id, quantity, stock, "sweet restocked");
        Ok(())
    }

    /// Sum of `price * quantity` over the catalog.
    pub fn total_stock_value(&self) -> f64 {
        self.sweets.iter().map(Sweet::stock_value).sum()
    }
}
