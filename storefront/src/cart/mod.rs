//! Shopping cart
//!
//! [`CartStore`] owns the cart lines and their persistence. Presentation
//! reads derived values from it and listens to its notifications.

mod store;

pub use store::{CART_STORAGE_KEY, CartStore};
