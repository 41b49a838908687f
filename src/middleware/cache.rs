use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_CACHE: &str = "public, no-cache";
const SEO_CACHE: &str = "public, max-age=3600";
const NO_CACHE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Middleware to set cache control headers
/// - Embedded assets: cached, revalidated against their ETag
/// - robots.txt and sitemap.xml: cached for an hour
/// - Pages and API responses: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if path.starts_with("/static/") {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(STATIC_CACHE));
    } else if path == "/robots.txt" || path == "/sitemap.xml" {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(SEO_CACHE));
    } else {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
