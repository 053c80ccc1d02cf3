//! Commerce domain types and logic for the Vitrine storefront.
//!
//! This crate provides the data model behind a single-page storefront:
//!
//! - **Catalog**: products, categories, featured listing, filtering
//! - **Cart**: line items, total transitions, derived totals
//! - **Money**: minor-unit monetary values with currency
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let catalog = sample_catalog();
//! let mut cart = Cart::new(Currency::Rub);
//!
//! for product in catalog.featured() {
//!     cart.add_item(product.clone());
//! }
//!
//! let totals = cart.totals();
//! println!("{} items, {}", totals.item_count, totals.total_display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::StorefrontError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{sample_catalog, Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem};
}
