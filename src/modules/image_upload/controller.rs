use crate::modules::auth::Session;
use crate::utils::storage::Folder;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};

pub const AUTO_HIDE_DURATION_MS: i64 = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Unresolved,
    Unauthenticated,
    Unauthorized,
    Authorized {
        folders: Vec<Folder>,
    },
}

impl PageState {
    /// `folders` is `None` when the listing has not been fetched or failed.
    pub fn resolve(session: &Session, folders: Option<Vec<Folder>>) -> Self {
        match (session, folders) {
            (Session::Anonymous, _) => Self::Unauthenticated,
            (Session::Admin(_), Some(folders)) => Self::Authorized { folders },
            _ => Self::Unauthorized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub contents: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Upload Successful",
            Self::Failure => "Upload Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at < Duration::milliseconds(AUTO_HIDE_DURATION_MS)
    }
}

/// Destination folder and image picked on the upload page.
///
/// Picking a listed folder and typing a new one are mutually exclusive.
/// `can_upload` latches on once both a folder and a file have been set and
/// stays on even if either is cleared later. After a successful upload only
/// the file name is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSelection {
    folder: Option<String>,
    new_folder: String,
    file: Option<SelectedFile>,
    file_uploaded: bool,
    can_upload: bool,
    notification: Option<Notification>,
}

impl UploadSelection {
    pub fn select_folder(&mut self, name: String) {
        self.folder = Some(name).filter(|name| !name.is_empty());
        self.new_folder.clear();
        self.refresh_can_upload();
    }

    pub fn type_new_folder(&mut self, text: String) {
        self.folder = None;
        self.new_folder = text;
    }

    pub fn confirm_new_folder(&mut self) {
        let name = std::mem::take(&mut self.new_folder);
        self.folder = Some(name).filter(|name| !name.is_empty());
        self.refresh_can_upload();
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
        self.file_uploaded = false;
        self.refresh_can_upload();
    }

    fn refresh_can_upload(&mut self) {
        if self.folder.is_some() && self.file.is_some() {
            self.can_upload = true;
        }
    }

    pub fn can_upload(&self) -> bool {
        self.can_upload
    }

    pub fn destination(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn new_folder(&self) -> &str {
        &self.new_folder
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// The selected file, unless it has already been uploaded.
    pub fn pending_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref().filter(|_| !self.file_uploaded)
    }

    pub fn record_outcome(&mut self, kind: NotificationKind, now: DateTime<Utc>) {
        if kind == NotificationKind::Success {
            if let Some(file) = self.file.as_mut() {
                file.contents = Bytes::new();
                self.file_uploaded = true;
            }
        }
        self.notification = Some(Notification {
            kind,
            issued_at: now,
        });
    }

    pub fn visible_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible(now))
    }

    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) {
        if self.visible_notification(now).is_none() {
            self.notification = None;
        }
    }
}
