//! Product catalog
//!
//! - [`CatalogStore`]: fetched product list, search filter, windowing
//! - [`SearchCoordinator`]: bridges the search input to a [`SearchTarget`]
//! - [`view`]: pure derivations and the [`CatalogView`] render state

mod search;
mod store;
pub mod view;

pub use search::{SearchCoordinator, SearchTarget};
pub use store::{CatalogError, CatalogResult, CatalogStore, LoadStatus};
pub use view::{CatalogView, DEFAULT_PAGE_SIZE};
