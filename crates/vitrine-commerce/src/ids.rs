//! Newtype identifier for catalog products.
//!
//! The catalog supplies numeric identifiers; wrapping them in a newtype
//! keeps them from being mixed up with quantities or prices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
