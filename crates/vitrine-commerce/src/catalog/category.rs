//! Category labels and the catalog filter.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product categories carried by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Headphones, speakers.
    Audio,
    /// Watches, wearables.
    Gadgets,
    /// Laptops, desktops.
    Computers,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Audio => "audio",
            Category::Gadgets => "gadgets",
            Category::Computers => "computers",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "audio" => Some(Category::Audio),
            "gadgets" => Some(Category::Gadgets),
            "computers" => Some(Category::Computers),
            _ => None,
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[Category::Audio, Category::Gadgets, Category::Computers]
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Audio => "Audio",
            Category::Gadgets => "Gadgets",
            Category::Computers => "Computers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The catalog filter selector.
///
/// `All` is the sentinel that bypasses category matching. Selecting a
/// filter is an unconditional overwrite; there is no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Show the full catalog.
    #[default]
    All,
    /// Show only products with the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// All filter values, sentinel first, in display order.
    pub fn all() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::all().iter().map(|c| CategoryFilter::Only(*c)));
        filters
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(category: Category) -> Product {
        Product::new(1, "Test", Money::new(1000, Currency::Rub), category)
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_str(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn test_sentinel_matches_everything() {
        for category in Category::all() {
            assert!(CategoryFilter::All.matches(&product(*category)));
        }
    }

    #[test]
    fn test_only_matches_exact_category() {
        let filter = CategoryFilter::Only(Category::Audio);
        assert!(filter.matches(&product(Category::Audio)));
        assert!(!filter.matches(&product(Category::Gadgets)));
    }

    #[test]
    fn test_filter_list_starts_with_sentinel() {
        let filters = CategoryFilter::all();
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters.len(), Category::all().len() + 1);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(CategoryFilter::from_str("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_str("audio"),
            Some(CategoryFilter::Only(Category::Audio))
        );
        assert_eq!(CategoryFilter::from_str("unknown"), None);
    }
}
