mod cloudinary;

pub use cloudinary::Cloudinary;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ListFailed,
    UploadFailed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Deserialize, Debug)]
pub struct FolderListing {
    pub folders: Vec<Folder>,
}

#[derive(Clone, Debug)]
pub struct Upload {
    pub upload_preset: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub contents: Bytes,
    /// Raw session token. The media host ignores it.
    pub token: String,
    pub folder: String,
}

/// External host that owns folder listing and image storage.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn list_folders(&self) -> Result<Vec<Folder>, Error>;

    /// Resolves with the host's JSON reply, whatever it says.
    async fn upload(&self, upload: Upload) -> Result<Value, Error>;
}

pub fn destination_path(root: &str, name: &str) -> String {
    format!("{}/{}", root, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_is_nested_under_root() {
        assert_eq!(destination_path("pixels", "weddings"), "pixels/weddings");
        assert_eq!(destination_path("pixels", ""), "pixels/");
    }

    #[test]
    fn folder_listing_tolerates_extra_fields() {
        let listing = serde_json::from_str::<FolderListing>(
            r#"{
                "folders": [
                    {"name": "weddings", "path": "pixels/weddings", "external_id": "abc"},
                    {"name": "florals"}
                ],
                "next_cursor": null,
                "total_count": 2
            }"#,
        )
        .unwrap();

        assert_eq!(
            listing.folders,
            vec![
                Folder {
                    name: "weddings".to_string(),
                    path: "pixels/weddings".to_string(),
                },
                Folder {
                    name: "florals".to_string(),
                    path: String::new(),
                },
            ]
        );
    }
}
