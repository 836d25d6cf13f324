//! Inventory error types.

use super::models::ItemId;
use crate::storage::StorageError;
use thiserror::Error;

/// Inventory errors
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Store write failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Item form input rejected; nothing was changed
    #[error("Invalid item input: {0}")]
    InvalidItemInput(String),

    /// Highest item id is already `ItemId::MAX`; no new id can be assigned
    #[error("No item id left after {0}")]
    IdsExhausted(ItemId),
}

impl InventoryError {
    /// Get a message suitable for showing next to the item form
    pub fn client_message(&self) -> String {
        match self {
            InventoryError::Storage(_) => "Unable to save inventory, please try again".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
