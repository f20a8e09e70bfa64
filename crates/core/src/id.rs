//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a sweet in the catalog.
///
/// The raw value `0` is representable here but rejected when a sweet is
/// constructed (a zero identifier counts as missing).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweetId(u32);

impl SweetId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for SweetId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<SweetId> for u32 {
    fn from(value: SweetId) -> Self {
        value.0
    }
}

impl FromStr for SweetId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|_| InventoryError::type_mismatch("non-negative integer id", s))?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_text() {
        assert_eq!(" 42 ".parse::<SweetId>().unwrap(), SweetId::new(42));
    }

    #[test]
    fn non_integer_text_is_a_type_mismatch() {
        for bad in ["abc", "1.5", "-3", ""] {
            let err = bad.parse::<SweetId>().unwrap_err();
            assert_eq!(err.code(), "type_mismatch", "input {bad:?}");
        }
    }

    #[test]
    fn zero_parses_but_reports_zero() {
        let id: SweetId = "0".parse().unwrap();
        assert!(id.is_zero());
    }
}
