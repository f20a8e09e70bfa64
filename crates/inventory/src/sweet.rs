use serde::{Deserialize, Serialize};

use sweetshop_core::{Entity, InventoryError, InventoryResult, SweetId};

/// Entity: a sweet stocked by the shop.
///
/// Only `quantity` changes after construction, and only through the
/// inventory's purchase/restock operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SweetRecord")]
pub struct Sweet {
    id: SweetId,
    name: String,
    category: String,
    price: f64,
    quantity: u32,
}

/// Unvalidated field set for a sweet, as it arrives from a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweetRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl Sweet {
    /// Construct and validate a sweet in one step.
    ///
    /// Checks run in a fixed order: missing fields (`id`, `name`, `category`),
    /// then price, then quantity. The first failing check is reported.
    pub fn new(
        id: impl Into<SweetId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> InventoryResult<Self> {
        let id = id.into();
        let name = name.into();
        let category = category.into();

        if id.is_zero() {
            return Err(InventoryError::missing_field("id"));
        }
        if name.is_empty() {
            return Err(InventoryError::missing_field("name"));
        }
        if category.is_empty() {
            return Err(InventoryError::missing_field("category"));
        }

        // Written so that NaN fails too.
        if !(price > 0.0 && price.is_finite()) {
            return Err(InventoryError::InvalidPrice(price));
        }

        let quantity = u32::try_from(quantity).map_err(|_| {
            InventoryError::invalid_quantity(format!("{quantity} (quantity cannot be negative)"))
        })?;

        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    pub fn sweet_id(&self) -> SweetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stock value of this line (`price * quantity`).
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Remove `amount` units from stock, returning what is left.
    pub(crate) fn take_stock(&mut self, amount: u32) -> InventoryResult<u32> {
        if self.quantity < amount {
            return Err(InventoryError::InsufficientStock {
                requested: amount,
                available: self.quantity,
            });
        }
        self.quantity -= amount;
        Ok(self.quantity)
    }

    /// Add `amount` units to stock, returning the new level.
    pub(crate) fn add_stock(&mut self, amount: u32) -> InventoryResult<u32> {
        self.quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            InventoryError::invalid_quantity(format!(
                "restocking {amount} would overflow current stock of {}",
                self.quantity
            ))
        })?;
        Ok(self.quantity)
    }
}

impl Entity for Sweet {
    type Id = SweetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sweets are equal when their identifiers match.
impl PartialEq for Sweet {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Sweet {}

impl TryFrom<SweetRecord> for Sweet {
    type Error = InventoryError;

    fn try_from(record: SweetRecord) -> Result<Self, Self::Error> {
        Sweet::new(
            record.id,
            record.name,
            record.category,
            record.price,
            record.quantity,
        )
    }
}

impl From<&Sweet> for SweetRecord {
    fn from(sweet: &Sweet) -> Self {
        Self {
            id: sweet.id.get(),
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price,
            quantity: i64::from(sweet.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chocolate_bar() -> Sweet {
        Sweet::new(1, "Chocolate Bar", "Chocolate", 2.99, 50).unwrap()
    }

    #[test]
    fn new_accepts_valid_fields() {
        let sweet = chocolate_bar();
        assert_eq!(sweet.sweet_id(), SweetId::new(1));
        assert_eq!(sweet.name(), "Chocolate Bar");
        assert_eq!(sweet.category(), "Chocolate");
        assert_eq!(sweet.price(), 2.99);
        assert_eq!(sweet.quantity(), 50);
    }

    #[test]
    fn new_accepts_zero_quantity() {
        let sweet = Sweet::new(3, "Lollipop", "Candy", 0.5, 0).unwrap();
        assert_eq!(sweet.quantity(), 0);
    }

    #[test]
    fn new_rejects_zero_id_as_missing() {
        let err = Sweet::new(0, "Lollipop", "Candy", 0.5, 1).unwrap_err();
        assert_eq!(err, InventoryError::MissingField("id"));
    }

    #[test]
    fn new_rejects_empty_name_and_category() {
        let err = Sweet::new(1, "", "Candy", 0.5, 1).unwrap_err();
        assert_eq!(err, InventoryError::MissingField("name"));

        let err = Sweet::new(1, "Lollipop", "", 0.5, 1).unwrap_err();
        assert_eq!(err, InventoryError::MissingField("category"));
    }

    #[test]
    fn new_accepts_whitespace_name_and_category() {
        let sweet = Sweet::new(1, " ", "Candy", 1.0, 1).unwrap();
        assert_eq!(sweet.name(), " ");

        let sweet = Sweet::new(2, "Lollipop", "   ", 1.0, 1).unwrap();
        assert_eq!(sweet.category(), "   ");
    }

    #[test]
    fn new_rejects_non_positive_price() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Sweet::new(1, "Lollipop", "Candy", price, 1).unwrap_err();
            assert_eq!(err.code(), "invalid_price", "price {price}");
        }
    }

    #[test]
    fn new_rejects_negative_quantity() {
        let err = Sweet::new(1, "Lollipop", "Candy", 0.5, -1).unwrap_err();
        assert_eq!(err.code(), "invalid_quantity");
    }

    #[test]
    fn missing_field_is_reported_before_numeric_checks() {
        let err = Sweet::new(1, "", "Candy", -1.0, -5).unwrap_err();
        assert_eq!(err.code(), "missing_field");

        let err = Sweet::new(1, "Lollipop", "Candy", -1.0, -5).unwrap_err();
        assert_eq!(err.code(), "invalid_price");
    }

    #[test]
    fn equality_is_by_identifier_only() {
        let a = chocolate_bar();
        let b = Sweet::new(1, "Different Sweet", "Candy", 1.99, 20).unwrap();
        let c = Sweet::new(2, "Chocolate Bar", "Chocolate", 2.99, 50).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn take_stock_never_goes_negative() {
        let mut sweet = chocolate_bar();
        assert_eq!(sweet.take_stock(50).unwrap(), 0);

        let err = sweet.take_stock(1).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                requested: 1,
                available: 0
            }
        );
        assert_eq!(sweet.quantity(), 0);
    }

    #[test]
    fn add_stock_rejects_overflow() {
        let mut sweet = Sweet::new(1, "Lollipop", "Candy", 0.5, i64::from(u32::MAX)).unwrap();
        let err = sweet.add_stock(1).unwrap_err();
        assert_eq!(err.code(), "invalid_quantity");
        assert_eq!(sweet.quantity(), u32::MAX);
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: Sweet = serde_json::from_str(
            r#"{"id":2,"name":"Gummy Bears","category":"Gummies","price":1.49,"quantity":100}"#,
        )
        .unwrap();
        assert_eq!(ok.name(), "Gummy Bears");

        let bad = serde_json::from_str::<Sweet>(
            r#"{"id":2,"name":"Gummy Bears","category":"Gummies","price":0.0,"quantity":100}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_plain_fields() {
        let json = serde_json::to_value(chocolate_bar()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Chocolate Bar");
        assert_eq!(json["quantity"], 50);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: anything that constructs satisfies the entity invariants.
            #[test]
            fn constructed_sweets_hold_invariants(
                id in 0u32..1000,
                name in "[ A-Za-z]{0,12}",
                category in "[ A-Za-z]{0,12}",
                price in -10.0f64..10.0,
                quantity in -50i64..50,
            ) {
                if let Ok(sweet) = Sweet::new(id, name, category, price, quantity) {
                    prop_assert!(sweet.price() > 0.0);
                    prop_assert!(!sweet.sweet_id().is_zero());
                    prop_assert!(!sweet.name().is_empty());
                    prop_assert!(!sweet.category().is_empty());
                    prop_assert_eq!(i64::from(sweet.quantity()), quantity);
                }
            }
        }
    }
}
