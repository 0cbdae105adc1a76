#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use songlib_api::config::{DatabaseConfig, Environment, ServerConfig};
use songlib_api::router::build_app_router;
use songlib_api::state::AppState;
use songlib_core::catalog::CatalogService;
use songlib_core::memory::InMemorySongStore;
use songlib_core::store::SongStore;
use songlib_db::PgSongStore;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Test,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
        },
    }
}

fn build_app(store: Arc<dyn SongStore>) -> Router {
    build_app_with_config(store, test_config())
}

/// Full router over an arbitrary store and config.
pub fn build_app_with_config(store: Arc<dyn SongStore>, config: ServerConfig) -> Router {
    let state = AppState {
        catalog: CatalogService::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Full router over a fresh in-memory store. No database needed.
pub fn build_test_app() -> Router {
    build_app(Arc::new(InMemorySongStore::new()))
}

/// Full router over the Postgres store.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    build_app(Arc::new(PgSongStore::new(pool)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    raw_json_request(app, method, uri, body.to_string()).await
}

pub async fn raw_json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: String,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

pub async fn delete_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::DELETE, uri, body).await
}

/// Read the whole body as bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Read the body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
