use axum::{extract::State, http::{StatusCode, header}, response::{IntoResponse, Response}};
use webpro_seo::{ChangeFrequency, Robots, Sitemap, SitemapConfig, SitemapRoute};

use crate::routes::AppState;

/// GET /robots.txt - crawlers are only welcome in production
pub async fn robots(State(app): State<AppState>) -> impl IntoResponse {
    let robots = if app.config.site.is_production() {
        Robots::standard_showcase(app.config.site.base_url())
    } else {
        Robots::development()
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots.to_text(),
    )
}

/// GET /sitemap.xml
pub async fn sitemap(State(app): State<AppState>) -> Response {
    let config = SitemapConfig {
        default_priority: 0.7,
        ..SitemapConfig::new(app.config.site.base_url())
    };

    let sitemap = Sitemap::generate(
        &config,
        &[SitemapRoute {
            priority: Some(1.0),
            change_frequency: Some(ChangeFrequency::Weekly),
            ..SitemapRoute::new("/")
        }],
    );

    match sitemap.to_xml() {
        Ok(xml) => (
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            xml,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to render sitemap: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
