use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemPatch, NewItem};

use crate::item_store::{ItemStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct MemInner {
    items: Vec<Item>,
    last_id: i64,
}

/// In-memory item store.
///
/// Intended for tests/dev. Ids are monotonic within the store's lifetime
/// and never reused, matching the SQLite backend's AUTOINCREMENT behavior.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: RwLock<MemInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(inner.items.clone())
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        inner.last_id += 1;
        let item = Item {
            id: ItemId::new(inner.last_id),
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            threshold: new.threshold,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, patch: ItemPatch) -> StoreResult<Item> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == patch.id)
            .ok_or(StoreError::NotFound)?;

        patch.apply_to(item);
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        if inner.items.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, quantity: i64) -> NewItem {
        NewItem {
            name: name.to_string(),
            category: "Electronics".to_string(),
            quantity,
            threshold: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_starting_at_one() {
        let store = MemStore::new();

        let a = store.create(new_item("Widget A", 10)).await.unwrap();
        let b = store.create(new_item("Widget B", 3)).await.unwrap();

        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(b.id, ItemId::new(2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemStore::new();

        let a = store.create(new_item("Widget A", 10)).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.create(new_item("Widget B", 3)).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_returns_items_in_insertion_order() {
        let store = MemStore::new();

        store.create(new_item("Widget A", 10)).await.unwrap();
        store.create(new_item("Widget B", 3)).await.unwrap();

        let items = store.list().await.unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Widget A", "Widget B"]);
    }

    #[tokio::test]
    async fn update_patches_only_present_fields() {
        let store = MemStore::new();
        let created = store.create(new_item("Widget A", 10)).await.unwrap();

        let updated = store
            .update(ItemPatch {
                quantity: Some(9),
                ..ItemPatch::new(created.id)
            })
            .await
            .unwrap();

        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.name, "Widget A");
        assert_eq!(updated.category, "Electronics");
        assert_eq!(updated.threshold, None);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemStore::new();

        let err = store
            .update(ItemPatch::new(ItemId::new(42)))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_item() {
        let store = MemStore::new();
        let created = store.create(new_item("Widget A", 10)).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = MemStore::new();

        let err = store.delete(ItemId::new(42)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
