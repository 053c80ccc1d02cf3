//! Active view section selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The view sections of the single-page storefront.
///
/// Exactly one section is active at a time. Switching is an
/// unconditional overwrite with no effect on the cart or the catalog
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Section {
    /// Landing view with the featured listing.
    #[default]
    Home,
    /// Full catalog with the category filter.
    Catalog,
    /// Cart contents and totals.
    Cart,
    /// Static about/contact view.
    About,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::Cart => "cart",
            Section::About => "about",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Section::Home),
            "catalog" => Some(Section::Catalog),
            "cart" => Some(Section::Cart),
            "about" => Some(Section::About),
            _ => None,
        }
    }

    /// All sections, in navigation order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Catalog,
            Section::Cart,
            Section::About,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
