use super::token::Session;
use crate::modules::image_upload::view;
use crate::types::Context;
use axum::extract::{Extension, FromRequestParts};
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{async_trait, RequestPartsExt};
use headers::{Cookie, HeaderMapExt};
use std::convert::Infallible;
use std::sync::Arc;

pub const TOKEN_COOKIE: &str = "token";

fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(TOKEN_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

/// The raw session token, if the browser sent one.
pub struct SessionToken(pub Option<String>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(token_from_parts(parts)))
    }
}

#[derive(Clone)]
pub struct AdminSession {
    pub token: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(IntoResponse::into_response)?;

        match Session::resolve(token_from_parts(parts), &ctx.auth.decoder) {
            Session::Admin(token) => Ok(Self { token }),
            Session::Member(_) => {
                tracing::debug!("Rejected non-admin session");
                Err((StatusCode::FORBIDDEN, view::unauthorized()).into_response())
            }
            Session::Anonymous => Err(Redirect::to(&ctx.auth.login_path).into_response()),
        }
    }
}
