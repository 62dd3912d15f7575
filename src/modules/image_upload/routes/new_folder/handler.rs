use super::service::service;
use super::types::request;
use crate::{modules::auth::AdminSession, types::Context};
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    session: AdminSession,
    State(ctx): State<Arc<Context>>,
    Form(body): Form<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { session, body }).await
}
