//! Data models
//!
//! Products mirror the remote catalog API payload exactly.
//! Cart lines serialize as the product fields plus `quantity`.

pub mod cart;
pub mod product;

// Re-exports
pub use cart::*;
pub use product::*;
