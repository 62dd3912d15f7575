mod new_folder;
mod page;
mod select_file;
mod select_folder;
mod upload;

use crate::types::Context;
use axum::routing::{get, post, Router};
use std::sync::Arc;

pub const PAGE_PATH: &str = "/image-upload";

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(page::handler).post(upload::handler))
        .route("/folder", post(select_folder::handler))
        .route("/new-folder", post(new_folder::handler))
        .route("/file", post(select_file::handler))
}
