//! HTTP API application wiring (Axum router + store wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and coercion into domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use stockroom_store::ItemStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The store handle is injected here and reaches handlers as an extension,
/// so tests can substitute the in-memory backend for SQLite.
pub fn build_app(store: Arc<dyn ItemStore>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(store)))
}
