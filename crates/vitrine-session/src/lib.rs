//! Session state holder for the Vitrine storefront.
//!
//! One [`StorefrontSession`] owns everything a single-page storefront
//! view renders from: the catalog supplied for the session, the cart,
//! the active view section, and the selected category filter. The view
//! layer dispatches [`Intent`]s into the session and re-renders from its
//! reads, driven by the observer notification that follows every
//! transition.
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//! use vitrine_session::prelude::*;
//!
//! let mut session = StorefrontSession::new(sample_catalog());
//!
//! let product = session.catalog().products()[0].clone();
//! session.dispatch(Intent::AddToCart(product));
//! session.dispatch(Intent::SelectSection(Section::Cart));
//!
//! assert_eq!(session.totals().item_count, 1);
//! ```

pub mod intent;
pub mod section;
pub mod store;

pub use intent::Intent;
pub use section::Section;
pub use store::{SessionObserver, StateChange, StorefrontSession};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::intent::Intent;
    pub use crate::section::Section;
    pub use crate::store::{SessionObserver, StateChange, StorefrontSession};
}
