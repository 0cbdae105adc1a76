//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router or store is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use songlib_api::error::AppError;
use songlib_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Song",
        key: "'Hysteria' by 'Muse'".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Song not found: 'Hysteria' by 'Muse'");
}

#[tokio::test]
async fn already_exists_error_returns_208() {
    let err = AppError::Core(CoreError::AlreadyExists {
        entity: "Song",
        key: "'Hysteria' by 'Muse'".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::ALREADY_REPORTED);
    assert_eq!(json["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation("page must be >= 1, got 0".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "page must be >= 1, got 0");
}

#[tokio::test]
async fn store_failure_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::StoreFailure(
        "connection refused to 10.0.0.5:5432".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Request-decoding errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}
