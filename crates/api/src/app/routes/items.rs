use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockroom_core::ItemId;
use stockroom_store::ItemStore;

use crate::app::{dto, errors};

/// GET /api/items — the full current collection.
pub async fn list_items(
    Extension(store): Extension<Arc<dyn ItemStore>>,
) -> axum::response::Response {
    let items = match store.list().await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "failed to list items");
            return errors::store_error_to_response(e);
        }
    };

    (StatusCode::OK, Json(items)).into_response()
}

/// POST /api/items — create an item; the store assigns the id.
pub async fn create_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let new = match body.into_new_item() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "rejected create item request");
            return errors::domain_error_to_response(e);
        }
    };

    let item = match store.create(new).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "failed to create item");
            return errors::store_error_to_response(e);
        }
    };

    (StatusCode::CREATED, Json(item)).into_response()
}

/// PUT /api/items — partial update addressed by the id in the body.
pub async fn update_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let patch = match body.into_patch() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "rejected update item request");
            return errors::domain_error_to_response(e);
        }
    };

    let item = match store.update(patch).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "failed to update item");
            return errors::store_error_to_response(e);
        }
    };

    (StatusCode::OK, Json(item)).into_response()
}

/// DELETE /api/items — hard delete addressed by the id in the body.
pub async fn delete_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Json(body): Json<dto::DeleteItemRequest>,
) -> axum::response::Response {
    if let Err(e) = store.delete(ItemId::new(body.id)).await {
        tracing::error!(error = %e, id = body.id, "failed to delete item");
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Item deleted successfully",
        })),
    )
        .into_response()
}
