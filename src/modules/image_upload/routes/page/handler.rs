use super::service::service;
use super::types::request;
use crate::{modules::auth::SessionToken, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    SessionToken(token): SessionToken,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    service(ctx, request::Payload { token }).await
}
