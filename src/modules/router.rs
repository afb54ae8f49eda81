use super::{health, media};
use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/health", health::get_router())
        .nest("/media", media::get_router())
}
