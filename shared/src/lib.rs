//! Shared types for the storefront workspace
//!
//! Catalog and cart data models, cart notifications and presentation-neutral
//! display helpers. Nothing in this crate performs I/O.

pub mod models;
pub mod notification;
pub mod util;

// Re-exports
pub use models::{CartLine, Product, ProductId, Rating};
pub use notification::{Notification, NotificationLevel};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
