mod process;
mod upload;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/upload", upload::get_router())
        .nest("/process", process::get_router())
}
