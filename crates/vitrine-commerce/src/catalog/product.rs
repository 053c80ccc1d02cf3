//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable for the lifetime of a session; the catalog is
/// supplied whole and never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL for listings.
    pub image_url: String,
    /// Category this product belongs to.
    pub category: Category,
    /// Whether the product is shown in the featured listing.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: String::new(),
            category,
            featured: false,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Mark the product as featured.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Format the unit price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            1,
            "Premium Headphones",
            Money::new(2499000, Currency::Rub),
            Category::Audio,
        );
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Premium Headphones");
        assert!(!product.featured);
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            2,
            "Smart Watch",
            Money::new(3499000, Currency::Rub),
            Category::Gadgets,
        )
        .with_image("https://example.com/watch.jpg")
        .with_featured(true);

        assert_eq!(product.image_url, "https://example.com/watch.jpg");
        assert!(product.featured);
    }

    #[test]
    fn test_featured_defaults_to_false_on_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "Laptop Pro",
            "price": { "amount_minor": 11999000, "currency": "Rub" },
            "image_url": "",
            "category": "Computers"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.featured);
    }
}
