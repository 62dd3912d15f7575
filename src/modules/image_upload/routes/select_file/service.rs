use super::types::{request, response};
use crate::modules::image_upload::controller::SelectedFile;
use crate::types::Context;
use bytes::Bytes;
use chrono::Utc;
use std::{io::Read, sync::Arc};
use ulid::Ulid;

fn read_selected_file(field: request::File) -> Result<Option<SelectedFile>, response::Error> {
    let mut buf: Vec<u8> = vec![];
    let mut contents = field.contents;

    contents.read_to_end(&mut buf).map_err(|err| {
        tracing::error!("Failed to read the selected file {:?}", err);
        response::Error::FailedToReadFile
    })?;

    let name = field.metadata.file_name.filter(|name| !name.is_empty());

    // Browsers send an empty, nameless part when the picker was cancelled.
    if name.is_none() && buf.is_empty() {
        return Ok(None);
    }

    Ok(Some(SelectedFile {
        name: name.unwrap_or_else(|| Ulid::new().to_string()),
        content_type: field.metadata.content_type,
        contents: Bytes::from(buf),
    }))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let file = match payload.body.file {
        Some(field) => read_selected_file(field)?,
        None => None,
    };

    if let Some(file) = &file {
        tracing::debug!("Selected {} ({} bytes)", file.name, file.contents.len());
    }

    ctx.selections
        .update(&payload.session.token, Utc::now(), move |selection| {
            selection.select_file(file)
        })
        .await;

    Ok(response::Success::FileSelected)
}
