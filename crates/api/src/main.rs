use std::sync::Arc;

use stockroom_store::SqliteStore;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let db_url = std::env::var("STOCKROOM_DB").unwrap_or_else(|_| {
        tracing::warn!("STOCKROOM_DB not set; using ./stockroom.db");
        "sqlite://stockroom.db?mode=rwc".to_string()
    });

    let store = SqliteStore::open(&db_url)
        .await
        .expect("failed to open item store");

    let app = stockroom_api::app::build_app(Arc::new(store));

    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
