use super::types::{request, response};
use crate::modules::image_upload::controller::NotificationKind;
use crate::types::Context;
use crate::utils::storage::{destination_path, Upload};
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let token = payload.session.token;
    let selection = ctx.selections.snapshot(&token, Utc::now()).await;

    if !selection.can_upload() {
        tracing::debug!("Upload requested before a folder and file were selected");
        return Ok(response::Success::NothingToUpload);
    }

    if selection.pending_file().is_none() && selection.file().is_some() {
        tracing::debug!("Selected file was already uploaded");
        return Ok(response::Success::NothingToUpload);
    }

    let outcome = match selection.pending_file() {
        Some(file) => {
            let folder = destination_path(
                &ctx.storage.root_folder,
                selection.destination().unwrap_or_default(),
            );
            let upload = Upload {
                upload_preset: ctx.storage.upload_preset.clone(),
                file_name: file.name.clone(),
                content_type: file.content_type.clone(),
                contents: file.contents.clone(),
                token: token.clone(),
                folder: folder.clone(),
            };

            match ctx.media.upload(upload).await {
                Ok(_) => {
                    tracing::info!("Uploaded {} to {}", file.name, folder);
                    NotificationKind::Success
                }
                Err(err) => {
                    tracing::error!("Failed to upload {} to {}: {:?}", file.name, folder, err);
                    NotificationKind::Failure
                }
            }
        }
        None => {
            tracing::error!("Upload requested after the selected file was cleared");
            NotificationKind::Failure
        }
    };

    ctx.selections
        .update(&token, Utc::now(), |selection| {
            selection.record_outcome(outcome, Utc::now())
        })
        .await;

    Ok(response::Success::Uploaded)
}
