use super::types::{request, response};
use crate::types::Context;
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let name = payload.body.new_folder;

    ctx.selections
        .update(&payload.session.token, Utc::now(), move |selection| {
            selection.type_new_folder(name);
            selection.confirm_new_folder();
        })
        .await;

    Ok(response::Success::FolderConfirmed)
}
