//! Read-side query types: search filters and sort keys.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sweetshop_core::{InventoryError, InventoryResult};

use crate::sweet::Sweet;

/// Conjunctive search filter. Absent (or empty) fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the sweet's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Case-sensitive exact match on the sweet's category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Inclusive lower price bound.
    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Inclusive upper price bound.
    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn validate(&self) -> InventoryResult<()> {
        let min = self.min_price.unwrap_or(f64::NEG_INFINITY);
        let max = self.max_price.unwrap_or(f64::INFINITY);

        if min.is_nan() || max.is_nan() || min > max {
            return Err(InventoryError::InvalidRange { min, max });
        }
        Ok(())
    }

    /// Whether `sweet` passes every supplied filter. Assumes `validate` passed.
    pub fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !sweet.name().to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if sweet.category() != category {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| sweet.price() < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| sweet.price() > max) {
            return false;
        }
        true
    }
}

/// Field a listing can be sorted by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Category,
    Price,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Category, SortKey::Price];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Price => "price",
        }
    }

    /// Natural ordering of the chosen field: lexicographic for strings,
    /// numeric for price.
    pub fn compare(self, a: &Sweet, b: &Sweet) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Category => a.category().cmp(b.category()),
            SortKey::Price => a.price().total_cmp(&b.price()),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            _ => Err(InventoryError::invalid_sort_key(s)),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: u32, name: &str, category: &str, price: f64) -> Sweet {
        Sweet::new(id, name, category, price, 1).unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::new();
        assert!(query.validate().is_ok());
        assert!(query.matches(&sweet(1, "Toffee", "Candy", 1.0)));
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let query = SearchQuery::new().name("CHOCO");
        assert!(query.matches(&sweet(1, "Dark chocolate", "Chocolate", 1.0)));
        assert!(!query.matches(&sweet(2, "Gummy Bears", "Gummies", 1.0)));
    }

    #[test]
    fn category_filter_is_case_sensitive_exact() {
        let query = SearchQuery::new().category("Candy");
        assert!(query.matches(&sweet(1, "Toffee", "Candy", 1.0)));
        assert!(!query.matches(&sweet(2, "Toffee", "candy", 1.0)));
        assert!(!query.matches(&sweet(3, "Toffee", "Candy Floss", 1.0)));
    }

    #[test]
    fn empty_string_filters_are_ignored() {
        let query = SearchQuery::new().name("").category("");
        assert!(query.matches(&sweet(1, "Toffee", "Candy", 1.0)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let query = SearchQuery::new().min_price(1.0).max_price(2.0);
        assert!(query.matches(&sweet(1, "A", "C", 1.0)));
        assert!(query.matches(&sweet(2, "B", "C", 2.0)));
        assert!(!query.matches(&sweet(3, "D", "C", 2.01)));
        assert!(!query.matches(&sweet(4, "E", "C", 0.99)));
    }

    #[test]
    fn inverted_or_nan_bounds_are_rejected() {
        let err = SearchQuery::new().min_price(3.0).max_price(2.0).validate().unwrap_err();
        assert_eq!(err, InventoryError::InvalidRange { min: 3.0, max: 2.0 });

        let err = SearchQuery::new().min_price(f64::NAN).validate().unwrap_err();
        assert_eq!(err.code(), "invalid_range");
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(SearchQuery::new().min_price(2.0).max_price(2.0).validate().is_ok());
    }

    #[test]
    fn sort_key_parses_known_names_only() {
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!(" Name ".parse::<SortKey>().unwrap(), SortKey::Name);
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }

        let err = "quantity".parse::<SortKey>().unwrap_err();
        assert_eq!(err, InventoryError::InvalidSortKey("quantity".to_string()));
    }

    #[test]
    fn descending_reverses_the_comparator() {
        let cheap = sweet(1, "A", "C", 1.0);
        let dear = sweet(2, "B", "C", 2.0);

        assert_eq!(
            SortOrder::Descending.apply(SortKey::Price.compare(&cheap, &dear)),
            Ordering::Greater
        );
        assert_eq!(SortOrder::from_reverse(false), SortOrder::Ascending);
    }
}
