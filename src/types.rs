use crate::modules::auth::token::TokenDecoder;
use crate::modules::image_upload::store::SelectionStore;
use crate::utils::storage::{Cloudinary, MediaHost};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub api_key: String,
    pub api_secret: String,
    pub api_endpoint: String,
    pub cloud_name: String,
    pub upload_preset: String,
    pub root_folder: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub decoder: TokenDecoder,
    pub login_path: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
    pub auth: AuthContext,
    pub media: Arc<dyn MediaHost>,
    pub selections: SelectionStore,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub api_key: String,
    pub api_secret: String,
    pub api_endpoint: String,
    pub cloud_name: String,
    pub upload_preset: String,
    pub root_folder: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub token_secret: Option<String>,
    pub login_path: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Default for Config {
    fn default() -> Self {
        let host = var_or("HOST", "0.0.0.0");
        let port = var_or("PORT", "8000")
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let storage_api_key = env::var("CLOUDINARY_API_KEY").expect("CLOUDINARY_API_KEY not set");
        let storage_api_secret =
            env::var("CLOUDINARY_API_SECRET").expect("CLOUDINARY_API_SECRET not set");
        let storage_api_endpoint =
            var_or("CLOUDINARY_API_ENDPOINT", "https://api.cloudinary.com/v1_1");
        let storage_cloud_name = var_or("CLOUDINARY_CLOUD_NAME", "jesscodes");
        let storage_upload_preset = var_or("CLOUDINARY_UPLOAD_PRESET", "wq9qoqey");
        let storage_root_folder = var_or("CLOUDINARY_ROOT_FOLDER", "pixels");
        let token_secret = env::var("TOKEN_SECRET").ok().filter(|s| !s.is_empty());
        let login_path = var_or("LOGIN_PATH", "/admin");

        Self {
            app: AppConfig { host, port, url },
            storage: StorageConfig {
                api_key: storage_api_key,
                api_secret: storage_api_secret,
                api_endpoint: storage_api_endpoint,
                cloud_name: storage_cloud_name,
                upload_preset: storage_upload_preset,
                root_folder: storage_root_folder,
            },
            auth: AuthConfig {
                token_secret,
                login_path,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        if self.auth.token_secret.is_none() {
            tracing::warn!(
                "TOKEN_SECRET not set, session tokens are decoded without signature verification"
            );
        }

        let storage = StorageContext {
            api_key: self.storage.api_key,
            api_secret: self.storage.api_secret,
            api_endpoint: self.storage.api_endpoint,
            cloud_name: self.storage.cloud_name,
            upload_preset: self.storage.upload_preset,
            root_folder: self.storage.root_folder,
        };

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            media: Arc::new(Cloudinary::new(storage.clone())),
            storage,
            auth: AuthContext {
                decoder: TokenDecoder::new(self.auth.token_secret.as_deref()),
                login_path: self.auth.login_path,
            },
            selections: SelectionStore::new(),
        }
    }
}
