use crate::storage::StorageError;
use storefront_client::ClientError;
use thiserror::Error;

/// Startup errors
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
