//! Derived cart aggregates.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart's two derived aggregates.
///
/// Recomputed from the line items on demand; never stored alongside the
/// cart itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of quantities across all line items.
    pub item_count: i64,
    /// Sum of unit price times quantity across all line items.
    pub total_price: Money,
}

impl CartTotals {
    /// Check if the snapshot describes an empty cart.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Format the total price for display.
    pub fn total_display(&self) -> String {
        self.total_price.display()
    }
}
