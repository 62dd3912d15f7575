use super::controller::{NotificationKind, UploadSelection, AUTO_HIDE_DURATION_MS};
use crate::utils::{layout, storage::Folder};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn unauthorized() -> Markup {
    layout::document("Image Upload", html! { div { "Unauthorized" } })
}

fn snackbar(selection: &UploadSelection, now: DateTime<Utc>) -> Markup {
    html! {
        @if let Some(notification) = selection.visible_notification(now) {
            @let class = match notification.kind {
                NotificationKind::Success => "snackbar",
                NotificationKind::Failure => "snackbar snackbar-error",
            };
            div class=(class) role="status" data-auto-hide-ms=(AUTO_HIDE_DURATION_MS) {
                (notification.kind.message())
            }
        }
    }
}

fn folder_options(folders: &[Folder], selection: &UploadSelection) -> Markup {
    html! {
        @for (key, folder) in folders.iter().enumerate() {
            @let id = format!("folder-{}", key);
            div {
                label for=(id) class="input-label" { (folder.name) }
                input type="radio"
                    id=(id)
                    name="folder"
                    value=(folder.name)
                    checked[selection.destination() == Some(folder.name.as_str())];
            }
        }
    }
}

pub fn form(folders: &[Folder], selection: &UploadSelection, now: DateTime<Utc>) -> Markup {
    let body = html! {
        div class="upload-container" {
            (snackbar(selection, now))
            div class="header" {
                h2 { "Upload new image" }
                br;
                a href="/" { "Return Home" }
            }
            div class="folder-selection-wrapper" {
                h5 { "Select Folder:" }
                @if !folders.is_empty() {
                    form method="post" action="/image-upload/folder" {
                        div class="radio-group" { (folder_options(folders, selection)) }
                        button type="submit" { "Select" }
                    }
                }
                @if let Some(name) = selection.destination() {
                    p class="destination" { "Destination: " (name) }
                }
            }
            div class="new-folder-wrapper" {
                h5 { "Or Create a New Folder:" }
                form method="post" action="/image-upload/new-folder" {
                    label for="newFolderChoice" {
                        input class="folder-input"
                            type="text"
                            id="newFolderChoice"
                            name="new_folder"
                            placeholder="Folder Name"
                            value=(selection.new_folder());
                    }
                    button class="confirm-button" type="submit" { "Confirm" }
                }
            }
            div class="image-actions-wrapper" {
                div class="upload-input-wrapper" {
                    h5 { "Choose Image" }
                    form method="post" action="/image-upload/file" enctype="multipart/form-data" {
                        input accept="image/*" id="icon-button-file" type="file" name="file";
                        button type="submit" aria-label="choose picture" { "Choose" }
                    }
                }
                div class="upload-wrapper" {
                    h5 { "Upload Image" }
                    form method="post" action="/image-upload" {
                        button type="submit"
                            id="upload-button"
                            aria-label="upload picture"
                            disabled[!selection.can_upload()] { "Upload" }
                    }
                }
            }
            @if let Some(file) = selection.file() {
                div class="upload-preview" {
                    h5 { "Selected Image: " (file.name) }
                }
            }
        }
    };

    layout::document("Image Upload", body)
}
