use crate::types::Context;
use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, Router},
};
use serde_json::json;
use std::sync::Arc;

async fn handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/", get(handler))
}
