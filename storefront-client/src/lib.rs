//! Storefront Client - HTTP client for the remote product catalog
//!
//! Provides the two catalog calls the storefront needs, behind the
//! [`CatalogApi`] trait so stores can be driven by any source.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{CatalogApi, HttpCatalogClient};

// Re-export shared types for convenience
pub use shared::models::{Product, ProductId};
