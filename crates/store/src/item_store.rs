use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemPatch, NewItem};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Exactly two kinds are distinguished: a missing record and everything
/// else. Callers map them to distinct HTTP statuses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Data access for the item collection.
///
/// Object-safe so the HTTP layer can hold an `Arc<dyn ItemStore>`; the
/// SQLite backend serves production, the in-memory one serves tests.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Full current collection in id (insertion) order.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Persist a new item; the store assigns the id.
    async fn create(&self, new: NewItem) -> StoreResult<Item>;

    /// Apply a partial update and return the updated item.
    async fn update(&self, patch: ItemPatch) -> StoreResult<Item>;

    /// Hard delete.
    async fn delete(&self, id: ItemId) -> StoreResult<()>;
}
