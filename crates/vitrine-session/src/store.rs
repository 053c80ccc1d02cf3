//! The session state holder.

use crate::intent::Intent;
use crate::section::Section;
use serde::{Deserialize, Serialize};
use vitrine_commerce::cart::{Cart, CartTotals, LineItem};
use vitrine_commerce::catalog::{Catalog, CategoryFilter, Product};
use vitrine_commerce::error::StorefrontError;
use vitrine_commerce::ids::ProductId;

/// Which part of the session state an intent moved.
///
/// Passed to observers after each transition; observers re-read the
/// session for the new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateChange {
    /// The cart contents changed.
    CartChanged,
    /// The category filter changed.
    FilterChanged,
    /// The active section changed.
    SectionChanged,
}

/// An observer notified after every state transition.
///
/// This replaces framework re-render semantics: a view layer subscribes
/// once and re-renders the affected region when notified.
pub trait SessionObserver {
    fn state_changed(&self, change: &StateChange);
}

/// Session-scoped storefront state.
///
/// Owns the catalog supplied for the session, one cart, the active
/// section, and the selected category filter. All transitions go through
/// [`StorefrontSession::dispatch`] and are applied synchronously, in
/// call order. The session is single-threaded by construction: every
/// transition takes `&mut self` and there is no interior mutability.
pub struct StorefrontSession {
    catalog: Catalog,
    cart: Cart,
    section: Section,
    filter: CategoryFilter,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl StorefrontSession {
    /// Create a session over a catalog.
    ///
    /// The cart starts empty in the catalog's currency, the home section
    /// is active, and the filter is the show-all sentinel. The catalog
    /// is immutable for the lifetime of the session.
    pub fn new(catalog: Catalog) -> Self {
        let currency = catalog
            .products()
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        tracing::info!(products = catalog.len(), %currency, "session started");
        Self {
            catalog,
            cart: Cart::new(currency),
            section: Section::default(),
            filter: CategoryFilter::default(),
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to state transitions.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Apply a user intent.
    ///
    /// Transitions are total: no intent can fail, and intents targeting
    /// an absent line item are no-ops. Observers are notified once per
    /// dispatched intent, after the state has been updated.
    pub fn dispatch(&mut self, intent: Intent) {
        let change = match intent {
            Intent::AddToCart(product) => {
                tracing::debug!(product_id = %product.id, "add to cart");
                self.cart.add_item(product);
                StateChange::CartChanged
            }
            Intent::RemoveFromCart(id) => {
                tracing::debug!(product_id = %id, "remove from cart");
                self.cart.remove_item(id);
                StateChange::CartChanged
            }
            Intent::SetQuantity {
                product_id,
                quantity,
            } => {
                tracing::debug!(product_id = %product_id, quantity, "set quantity");
                self.cart.set_quantity(product_id, quantity);
                StateChange::CartChanged
            }
            Intent::SelectFilter(filter) => {
                tracing::debug!(filter = %filter, "select filter");
                self.filter = filter;
                StateChange::FilterChanged
            }
            Intent::SelectSection(section) => {
                tracing::debug!(section = %section, "select section");
                self.section = section;
                StateChange::SectionChanged
            }
        };
        self.notify(change);
    }

    /// Resolve a product ID against the catalog and add it to the cart.
    ///
    /// Unlike [`StorefrontSession::dispatch`], this can fail: an ID the
    /// catalog does not know is an error, as is a product priced in a
    /// currency other than the cart's. The cart is left untouched on
    /// failure.
    pub fn add_to_cart_by_id(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(id))?;
        if product.price.currency != self.cart.currency() {
            return Err(StorefrontError::CurrencyMismatch {
                expected: self.cart.currency().code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }
        self.dispatch(Intent::AddToCart(product));
        Ok(())
    }

    /// The catalog supplied for this session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items in insertion order.
    pub fn cart_items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Snapshot of the derived cart aggregates.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The active view section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// The selected category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Catalog products passing the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(self.filter)
    }

    /// Featured products for the home section, in catalog order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.catalog.featured()
    }

    fn notify(&self, change: StateChange) {
        for observer in &self.observers {
            observer.state_changed(&change);
        }
    }
}
