use axum::{
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::{Ready, ready},
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves the files of `static/` embedded in the binary.
#[derive(Default, Clone, Copy)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }

    fn respond(path: &str, if_none_match: Option<&str>) -> Response {
        let Some(content) = Assets::get(path) else {
            return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
        };

        // asset names carry no content hash
        let hash = content.metadata.sha256_hash();
        let etag = format!(
            "\"{:016x}\"",
            u64::from_be_bytes([
                hash[0], hash[1], hash[2], hash[3], hash[4], hash[5], hash[6], hash[7]
            ])
        );

        if if_none_match == Some(etag.as_str()) {
            return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
        }

        let mime = mime_guess::from_path(path).first_or_octet_stream();

        (
            [
                (header::CONTENT_TYPE, mime.as_ref().to_owned()),
                (header::ETAG, etag),
            ],
            content.data,
        )
            .into_response()
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let if_none_match = req
            .headers()
            .get(header::IF_NONE_MATCH)
            .and_then(|value| value.to_str().ok());

        ready(Ok(Self::respond(req.uri().path(), if_none_match)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_script_is_served_with_its_mime_type() {
        let response = AssetsService::respond("/contact.js", None);

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[test]
    fn test_matching_etag_is_not_modified() {
        let response = AssetsService::respond("/app.css", None);
        let etag = response.headers()[header::ETAG].to_str().unwrap().to_owned();

        let response = AssetsService::respond("/app.css", Some(&etag));
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);

        let response = AssetsService::respond("/app.css", Some("\"stale\""));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_unknown_asset_is_not_found() {
        let response = AssetsService::respond("/missing.css", None);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
