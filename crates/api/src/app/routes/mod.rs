use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for all endpoints.
///
/// The item operations share one path and differ by method — the wire
/// contract the browser frontend was written against.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/api/items",
            get(items::list_items)
                .post(items::create_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
