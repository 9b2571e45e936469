use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemPatch, NewItem};

use crate::item_store::{ItemStore, StoreError, StoreResult};

/// SQLite-backed item store.
///
/// The schema is created on open, so a fresh database file works without a
/// separate migration step. `AUTOINCREMENT` keeps deleted ids from being
/// reused.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (and if needed create) the database at `db_url`,
    /// e.g. `sqlite://stockroom.db?mode=rwc`.
    pub async fn open(db_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(db_url)
            .await
            .with_context(|| format!("failed to open SQLite pool for {db_url}"))?;

        Self::from_pool(pool).await
    }

    /// An in-memory database, pinned to a single connection so it lives as
    /// long as the pool. Used by tests.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("failed to open in-memory SQLite pool")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                name      TEXT NOT NULL,
                category  TEXT NOT NULL DEFAULT '',
                quantity  INTEGER NOT NULL,
                threshold INTEGER NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create items table")?;

        Ok(Self { pool })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

fn row_to_item(row: &SqliteRow) -> Item {
    Item {
        id: ItemId::new(row.get::<i64, _>("id")),
        name: row.get("name"),
        category: row.get("category"),
        quantity: row.get::<i64, _>("quantity"),
        threshold: row.get::<Option<i64>, _>("threshold"),
    }
}

#[async_trait]
impl ItemStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query(
            "SELECT id, name, category, quantity, threshold FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        let result = sqlx::query(
            "INSERT INTO items (name, category, quantity, threshold) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.quantity)
        .bind(new.threshold)
        .execute(&self.pool)
        .await?;

        Ok(Item {
            id: ItemId::new(result.last_insert_rowid()),
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            threshold: new.threshold,
        })
    }

    async fn update(&self, patch: ItemPatch) -> StoreResult<Item> {
        let row = sqlx::query(
            "SELECT id, name, category, quantity, threshold FROM items WHERE id = ?1",
        )
        .bind(patch.id.as_i64())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        let mut item = row_to_item(&row);
        patch.apply_to(&mut item);

        sqlx::query(
            "UPDATE items SET name = ?1, category = ?2, quantity = ?3, threshold = ?4 WHERE id = ?5",
        )
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.quantity)
        .bind(item.threshold)
        .bind(item.id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, quantity: i64, threshold: Option<i64>) -> NewItem {
        NewItem {
            name: name.to_string(),
            category: "Electronics".to_string(),
            quantity,
            threshold,
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips_all_fields() {
        let store = SqliteStore::in_memory().await.unwrap();

        let created = store
            .create(new_item("Widget A", 10, Some(3)))
            .await
            .unwrap();
        assert_eq!(created.id, ItemId::new(1));

        let items = store.list().await.unwrap();
        assert_eq!(items, vec![created]);
    }

    #[tokio::test]
    async fn null_threshold_round_trips_as_none() {
        let store = SqliteStore::in_memory().await.unwrap();

        store.create(new_item("Widget A", 10, None)).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items[0].threshold, None);
    }

    #[tokio::test]
    async fn update_patches_only_present_fields() {
        let store = SqliteStore::in_memory().await.unwrap();
        let created = store
            .create(new_item("Widget A", 10, Some(4)))
            .await
            .unwrap();

        let updated = store
            .update(ItemPatch {
                quantity: Some(9),
                ..ItemPatch::new(created.id)
            })
            .await
            .unwrap();

        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.name, "Widget A");
        assert_eq!(updated.threshold, Some(4));

        // The change is persisted, not just echoed.
        let items = store.list().await.unwrap();
        assert_eq!(items[0].quantity, 9);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = SqliteStore::in_memory().await.unwrap();

        let err = store
            .update(ItemPatch::new(ItemId::new(42)))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_then_list_is_empty_and_id_not_reused() {
        let store = SqliteStore::in_memory().await.unwrap();

        let a = store.create(new_item("Widget A", 10, None)).await.unwrap();
        store.delete(a.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        let b = store.create(new_item("Widget B", 2, None)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = SqliteStore::in_memory().await.unwrap();

        let err = store.delete(ItemId::new(42)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
