use super::types::{request, response};
use crate::modules::auth::Session;
use crate::modules::image_upload::{controller::PageState, view};
use crate::types::Context;
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let session = Session::resolve(payload.token, &ctx.auth.decoder);

    let folders = if session.is_admin() {
        ctx.media
            .list_folders()
            .await
            .map_err(|err| {
                tracing::warn!("Folder listing unavailable: {:?}", err);
            })
            .ok()
    } else {
        None
    };

    match (PageState::resolve(&session, folders), session.token()) {
        (PageState::Unauthenticated, _) => Err(response::Error::Unauthenticated(
            ctx.auth.login_path.clone(),
        )),
        (PageState::Authorized { folders }, Some(token)) => {
            let now = Utc::now();
            let selection = ctx.selections.snapshot(token, now).await;
            Ok(response::Success::Form(view::form(&folders, &selection, now)))
        }
        _ => Ok(response::Success::Unauthorized),
    }
}
