//! Utilities

pub mod logger;
pub mod ticket;

pub use ticket::{Generation, LoadTicket};
