use super::footer;
use crate::{types::Context, utils::layout};
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use maud::{html, Markup};
use serde_json::json;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Pixels & Petals" })),
    )
}

fn home_page() -> Markup {
    layout::document(
        "Pixels & Petals",
        html! {
            section id="home" {
                h1 { "Pixels & Petals" }
                p { "Photography and floral design." }
            }
            section id="about" {
                h2 { "About" }
                p { "Weddings, portraits and arrangements for every occasion." }
            }
            section id="gallery" {
                h2 { "Gallery" }
            }
            (footer::render())
        },
    )
}

async fn home() -> Markup {
    home_page()
}

async fn admin() -> Markup {
    layout::document(
        "Admin",
        html! {
            div class="admin-container" {
                h2 { "Admin" }
                p { "Sign in to manage images." }
                a href="/" { "Return Home" }
            }
        },
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(home))
        .route("/admin", get(admin))
        .route("/health", get(health_check))
}
