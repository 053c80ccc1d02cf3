//! User intents dispatched by the view layer.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::{CategoryFilter, Product};
use vitrine_commerce::ids::ProductId;

/// A user-triggered intent.
///
/// One variant per write the view layer may dispatch into the session.
/// Intents are plain data; they are applied synchronously, in dispatch
/// order, and none of them can fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Intent {
    /// Add one unit of a product to the cart.
    AddToCart(Product),
    /// Remove a line item from the cart.
    RemoveFromCart(ProductId),
    /// Set a line item's quantity; zero or below removes it.
    SetQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    /// Select the catalog category filter.
    SelectFilter(CategoryFilter),
    /// Switch the active view section.
    SelectSection(Section),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_is_plain_data() {
        let intent = Intent::SetQuantity {
            product_id: ProductId::new(1),
            quantity: 5,
        };
        let json = serde_json::to_string(&intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }
}
