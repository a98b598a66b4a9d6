//! Storefront - client-side state core of a product catalog shop
//!
//! # Modules
//!
//! ```text
//! storefront/src/
//! ├── core/       # configuration, Storefront container, startup errors
//! ├── cart/       # CartStore: lines, derived totals, persistence, notifications
//! ├── catalog/    # CatalogStore, search coordination, windowed views
//! ├── detail.rs   # single product loader + quantity selector
//! ├── storage.rs  # redb-backed local storage
//! └── utils/      # logging, load tickets
//! ```
//!
//! The catalog itself comes from `storefront-client`; shared data types
//! live in `shared`.

pub mod cart;
pub mod catalog;
pub mod core;
pub mod detail;
pub mod storage;
pub mod utils;

// Re-export public types
pub use cart::CartStore;
pub use catalog::{CatalogError, CatalogStore, CatalogView, SearchCoordinator};
pub use core::{CheckoutOutcome, Config, Storefront, StorefrontError};
pub use detail::{DetailState, ProductDetailLoader, QuantitySelector};
pub use storage::{LocalStorage, RedbStorage, StorageError};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
