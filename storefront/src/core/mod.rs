//! Core - configuration and the store container

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{StorefrontError, StorefrontResult};
pub use state::{CheckoutOutcome, Storefront};
