//! The product catalog.

use crate::catalog::{CategoryFilter, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered, immutable product list supplied whole for a session.
///
/// Order is the supplier's listing order and is preserved by every read,
/// including filtered views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products with the featured flag, in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products passing the filter, in catalog order.
    ///
    /// The `All` sentinel returns the full catalog.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "A", Money::new(100, Currency::Rub), Category::Audio)
                .with_featured(true),
            Product::new(2, "B", Money::new(200, Currency::Rub), Category::Gadgets),
            Product::new(3, "C", Money::new(300, Currency::Rub), Category::Audio),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "B");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_sentinel_returns_full_catalog() {
        let catalog = catalog();
        let all = catalog.filter(CategoryFilter::All);
        assert_eq!(all.len(), 3);
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = catalog();
        let audio = catalog.filter(CategoryFilter::Only(Category::Audio));
        let names: Vec<_> = audio.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_featured_listing() {
        let catalog = catalog();
        let featured = catalog.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "A");
    }
}
