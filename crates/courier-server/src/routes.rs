//! HTTP routes
//!
//! - `POST /content`: `{"content": "..."}` を ContentCreator に渡す。成功時は 200 + 空ボディ
//! - `GET /health`: liveness
//!
//! 不正な JSON は axum の `Json` extractor が既定のステータスで弾きます。

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use courier_core::CourierError;
use courier_core::domain::ContentCreationRequest;
use courier_core::ports::ContentCreator;
use serde_json::json;
use tracing::debug;

/// Shared state for the handlers
#[derive(Clone)]
pub struct AppState {
    content: Arc<dyn ContentCreator>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentCreator>) -> Self {
        Self { content }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/content", post(create_content))
        .route("/health", get(health))
        .with_state(state)
}

async fn create_content(
    State(state): State<AppState>,
    Json(request): Json<ContentCreationRequest>,
) -> Result<StatusCode, ApiError> {
    let content = state.content.create(request)?;
    debug!(content_id = %content.id(), "content accepted");
    Ok(StatusCode::OK)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// 同期パスの失敗だけがここに来る（space 側の失敗は届かない）
#[derive(Debug)]
pub struct ApiError(CourierError);

impl From<CourierError> for ApiError {
    fn from(err: CourierError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
