//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every invalid input is surfaced as its own variant; nothing here is
/// transient, so callers should never retry the same call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// Identifier, name or category was absent (zero id or empty string).
    #[error("missing field: {0} cannot be empty")]
    MissingField(&'static str),

    /// Price was not a finite value strictly greater than zero.
    #[error("invalid price: {0} (price must be positive)")]
    InvalidPrice(f64),

    /// Quantity out of range (construction, purchase or restock).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A sweet with the same identifier is already stocked.
    #[error("sweet id {0} already exists")]
    DuplicateId(u32),

    /// No sweet with the given identifier.
    #[error("sweet id {0} not found")]
    NotFound(u32),

    /// Purchase asked for more units than are in stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Search price bounds are inverted or not comparable.
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Sort key outside the supported set.
    #[error("invalid sort key '{0}' (expected one of: name, category, price)")]
    InvalidSortKey(String),

    /// A value of the wrong kind was supplied where a specific type is required.
    #[error("type mismatch: expected {expected}, got '{got}'")]
    TypeMismatch { expected: &'static str, got: String },
}

impl InventoryError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_sort_key(key: impl Into<String>) -> Self {
        Self::InvalidSortKey(key.into())
    }

    pub fn type_mismatch(expected: &'static str, got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            got: got.into(),
        }
    }

    /// Stable machine-readable code for front ends.
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::MissingField(_) => "missing_field",
            InventoryError::InvalidPrice(_) => "invalid_price",
            InventoryError::InvalidQuantity(_) => "invalid_quantity",
            InventoryError::DuplicateId(_) => "duplicate_id",
            InventoryError::NotFound(_) => "not_found",
            InventoryError::InsufficientStock { .. } => "insufficient_stock",
            InventoryError::InvalidRange { .. } => "invalid_range",
            InventoryError::InvalidSortKey(_) => "invalid_sort_key",
            InventoryError::TypeMismatch { .. } => "type_mismatch",
        }
    }
}
