//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// The cart holds at most one line item per product ID, in insertion
/// order of first add. Every transition is total: operations on an
/// absent ID are no-ops, and a quantity at or below zero removes the
/// line item instead of producing an invalid state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<LineItem>,
    /// Currency totals are reported in.
    currency: Currency,
}

impl Cart {
    /// Create an empty cart reporting totals in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// If a line item with the same product ID exists, its quantity is
    /// incremented in place and its position in the sequence is kept;
    /// otherwise a new line item with quantity 1 is appended.
    pub fn add_item(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem::new(product));
    }

    /// Remove the line item with the given product ID.
    ///
    /// Returns whether anything was removed; an absent ID is a no-op.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() < len_before
    }

    /// Set a line item's quantity.
    ///
    /// A quantity at or below zero removes the line item, same as
    /// `remove_item`. Otherwise the quantity is overwritten if the line
    /// item exists; an absent ID is a no-op. Returns whether the cart
    /// changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get total price (sum of line item subtotals).
    pub fn total_price(&self) -> Money {
        let total = self
            .items
            .iter()
            .map(|i| i.subtotal().amount_minor)
            .fold(0_i64, i64::saturating_add);
        Money::new(total, self.currency)
    }

    /// Snapshot both derived aggregates at once.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.item_count(),
            total_price: self.total_price(),
        }
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in the cart, in insertion order of first add.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product ID.
    pub fn get_item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get_item(id).is_some()
    }

    /// Currency totals are reported in.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A line item in the cart: a product together with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product, as supplied by the catalog.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Subtotal for this line (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }

    /// Format the subtotal for display.
    pub fn subtotal_display(&self) -> String {
        self.subtotal().display()
    }
}
