#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use jsonwebtoken::{EncodingKey, Header};
use pixels_petals_site::{
    app,
    modules::{auth::TokenDecoder, image_upload::store::SelectionStore},
    types::{AppContext, AuthContext, Context, StorageContext},
    utils::storage::{Error, Folder, MediaHost, Upload},
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;

pub const BOUNDARY: &str = "X-PIXELS-BOUNDARY";

#[derive(Default)]
pub struct FakeHost {
    pub folders: Option<Vec<Folder>>,
    pub fail_uploads: bool,
    pub listings: AtomicUsize,
    pub uploads: Mutex<Vec<Upload>>,
}

impl FakeHost {
    pub fn with_folders(names: &[&str]) -> Self {
        Self {
            folders: Some(
                names
                    .iter()
                    .map(|name| Folder {
                        name: name.to_string(),
                        path: format!("pixels/{}", name),
                    })
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaHost for FakeHost {
    async fn list_folders(&self) -> Result<Vec<Folder>, Error> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        self.folders.clone().ok_or(Error::ListFailed)
    }

    async fn upload(&self, upload: Upload) -> Result<Value, Error> {
        self.uploads.lock().unwrap().push(upload);
        if self.fail_uploads {
            return Err(Error::UploadFailed);
        }
        Ok(json!({ "secure_url": "https://res.cloudinary.com/x.jpg" }))
    }
}

pub fn router(host: Arc<FakeHost>) -> Router {
    let ctx = Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 8000,
            url: "http://127.0.0.1:8000".to_string(),
        },
        storage: StorageContext {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_endpoint: "http://127.0.0.1:9".to_string(),
            cloud_name: "jesscodes".to_string(),
            upload_preset: "wq9qoqey".to_string(),
            root_folder: "pixels".to_string(),
        },
        auth: AuthContext {
            decoder: TokenDecoder::new(None),
            login_path: "/admin".to_string(),
        },
        media: host,
        selections: SelectionStore::new(),
    };

    app::router(Arc::new(ctx))
}

pub fn token(claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"login-flow-secret"),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    token(json!({ "admin": true, "sub": "jess" }))
}

fn with_token(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::COOKIE, format!("token={}", token)),
        None => builder,
    }
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let req = with_token(Request::builder().uri(uri), token)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(req).await.unwrap()
}

pub async fn post_form(router: &Router, uri: &str, token: Option<&str>, form: &str) -> Response<Body> {
    let req = with_token(Request::builder().method("POST").uri(uri), token)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    router.clone().oneshot(req).await.unwrap()
}

pub async fn post_file(
    router: &Router,
    token: Option<&str>,
    file_name: &str,
    contents: &[u8],
) -> Response<Body> {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: image/jpeg\r\n\r\n",
        b = BOUNDARY,
        f = file_name
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let req = with_token(
        Request::builder().method("POST").uri("/image-upload/file"),
        token,
    )
    .header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    )
    .body(Body::from(body))
    .unwrap();
    router.clone().oneshot(req).await.unwrap()
}

pub async fn text(res: Response<Body>) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn assert_redirect(res: &Response<Body>, to: &str) {
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), to);
}
