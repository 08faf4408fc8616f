use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use brainboard::app::build_app;
use brainboard::auth::credentials::PlaintextVerifier;
use brainboard::config::AppConfig;
use brainboard::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Build an app backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_db().await.0
}

/// Like [`test_app`], but also hands back the pool so tests can poke at
/// storage directly.
pub async fn test_app_with_db() -> (Router, SqlitePool) {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("run migrations");

    let config = Arc::new(AppConfig {
        database_url: "sqlite::memory:".into(),
        port: 0,
    });
    let app = build_app(AppState::from_parts(
        db.clone(),
        config,
        Arc::new(PlaintextVerifier),
    ));
    (app, db)
}

/// POST a JSON body to `uri`.
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
