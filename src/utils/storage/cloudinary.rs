use super::{Error, Folder, FolderListing, MediaHost, Upload};
use crate::types::StorageContext;
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde_json::Value;

pub struct Cloudinary {
    client: Client,
    cfg: StorageContext,
}

impl Cloudinary {
    pub fn new(cfg: StorageContext) -> Self {
        Self {
            client: Client::new(),
            cfg,
        }
    }

    fn folders_endpoint(&self) -> String {
        format!(
            "{}/{}/folders/{}",
            self.cfg.api_endpoint,
            self.cfg.cloud_name,
            urlencoding::encode(&self.cfg.root_folder)
        )
    }

    fn upload_endpoint(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.cfg.api_endpoint, self.cfg.cloud_name
        )
    }
}

#[async_trait]
impl MediaHost for Cloudinary {
    async fn list_folders(&self) -> Result<Vec<Folder>, Error> {
        let res = self
            .client
            .get(self.folders_endpoint())
            .basic_auth(&self.cfg.api_key, Some(&self.cfg.api_secret))
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to list folders: {:?}", err);
                Error::ListFailed
            })?;

        let status = res.status();
        let data = res.text().await.map_err(|err| {
            tracing::error!("Error occurred while processing folder listing: {:?}", err);
            Error::ListFailed
        })?;

        if status != StatusCode::OK {
            tracing::error!("Failed to list folders ({}): {}", status, data);
            return Err(Error::ListFailed);
        }

        serde_json::from_str::<FolderListing>(&data)
            .map(|listing| listing.folders)
            .map_err(|err| {
                tracing::error!("Failed to deserialize folder listing: {:?}", err);
                Error::ListFailed
            })
    }

    async fn upload(&self, upload: Upload) -> Result<Value, Error> {
        let mut part = Part::bytes(upload.contents.to_vec()).file_name(upload.file_name.clone());
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|err| {
                tracing::error!("Invalid content type {}: {:?}", content_type, err);
                Error::UploadFailed
            })?;
        }

        let form = Form::new()
            .text("upload_preset", upload.upload_preset)
            .part("file", part)
            .text("token", upload.token)
            .text("folder", upload.folder.clone());

        let res = self
            .client
            .post(self.upload_endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to upload a file: {:?}", err);
                Error::UploadFailed
            })?;

        if res.status() != StatusCode::OK {
            tracing::warn!(
                "Media host answered {} for upload of {} to {}",
                res.status(),
                upload.file_name,
                upload.folder
            );
        }

        res.json::<Value>().await.map_err(|err| {
            tracing::error!("Failed to read upload response: {:?}", err);
            Error::UploadFailed
        })
    }
}
