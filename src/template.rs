use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use webpro_seo::PageMetadata;

use crate::content::{FooterContent, HeaderContent};

/// Shared data of the page layout.
pub struct Layout<'a> {
    pub metadata: PageMetadata,
    pub json_ld: Option<String>,
    pub header: &'a HeaderContent,
    pub footer: &'a FooterContent,
    pub is_dev: bool,
}

impl<'a> Layout<'a> {
    pub fn new(
        metadata: PageMetadata,
        header: &'a HeaderContent,
        footer: &'a FooterContent,
    ) -> Self {
        Self {
            metadata,
            json_ld: None,
            header,
            footer,
            is_dev: cfg!(debug_assertions),
        }
    }
}

pub fn render<T: askama::Template>(template: &T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: askama::Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response()
        }
    }
}
