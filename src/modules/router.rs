use super::{image_upload, site};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(site::get_router())
        .nest("/image-upload", image_upload::get_router())
}
