use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::content::Content;

mod contact;
mod health;
mod index;
mod seo;

pub use index::NotFoundTemplate;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: webpro_contact::Command,
    pub content: Arc<Content>,
}

pub async fn fallback() -> impl IntoResponse {
    crate::template::render_with_status(StatusCode::NOT_FOUND, &NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/contact", post(contact::action))
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
