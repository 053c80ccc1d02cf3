//! Built-in demo catalog.
//!
//! A small fixed product set for tests and for hosts that want a working
//! storefront without wiring a catalog source.

use crate::catalog::{Catalog, Category, Product};
use crate::money::{Currency, Money};

/// Build the demo catalog: three featured products priced in rubles.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(
            1,
            "Premium Headphones",
            Money::new(2499000, Currency::Rub),
            Category::Audio,
        )
        .with_image("https://cdn.example.com/products/headphones.jpg")
        .with_featured(true),
        Product::new(
            2,
            "Smart Watch",
            Money::new(3499000, Currency::Rub),
            Category::Gadgets,
        )
        .with_image("https://cdn.example.com/products/watch.jpg")
        .with_featured(true),
        Product::new(
            3,
            "Laptop Pro",
            Money::new(11999000, Currency::Rub),
            Category::Computers,
        )
        .with_image("https://cdn.example.com/products/laptop.jpg")
        .with_featured(true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_is_well_formed() {
        let catalog = sample_catalog();
        assert!(!catalog.is_empty());

        let mut ids = HashSet::new();
        for product in &catalog {
            assert!(product.price.is_positive());
            assert_eq!(product.price.currency, Currency::Rub);
            assert!(ids.insert(product.id));
        }
    }

    #[test]
    fn test_sample_catalog_covers_every_category() {
        let catalog = sample_catalog();
        for category in Category::all() {
            assert!(catalog.products().iter().any(|p| p.category == *category));
        }
    }
}
