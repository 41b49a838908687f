use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use webpro_contact::{INVALID_BODY_MESSAGE, MISSING_FIELDS_MESSAGE, SubmitError};

pub const DELIVERY_FAILED_MESSAGE: &str = "Échec de l'envoi de l'email";

/// Failures of the JSON API, rendered as `{"error": ...}` bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected contact request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": INVALID_BODY_MESSAGE,
                        "details": rejection.body_text(),
                    })),
                )
                    .into_response()
            }
            ApiError::Submit(SubmitError::Validate(errors)) => {
                tracing::debug!(fields = ?errors.field_errors().keys().collect::<Vec<_>>(), "Missing required fields");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": MISSING_FIELDS_MESSAGE })),
                )
                    .into_response()
            }
            // provider refusals are reported as client errors
            ApiError::Submit(SubmitError::Provider(payload)) => {
                tracing::warn!(error = %payload, "Email provider rejected the contact request");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": payload }))).into_response()
            }
            ApiError::Submit(SubmitError::Unknown(e)) => {
                tracing::error!("Contact email failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": DELIVERY_FAILED_MESSAGE,
                        "details": e.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
