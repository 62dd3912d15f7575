use super::types::{request, response};
use crate::types::Context;
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let folder = payload
        .body
        .folder
        .ok_or(response::Error::NoFolderChosen)?;

    ctx.selections
        .update(&payload.session.token, Utc::now(), |selection| {
            selection.select_folder(folder)
        })
        .await;

    Ok(response::Success::FolderSelected)
}
