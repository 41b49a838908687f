use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use webpro_contact::SubmissionInput;

use crate::{error::ApiError, routes::AppState};

/// POST /api/contact
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<SubmissionInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = input?;

    let receipt = app_state.contact_command.submit(input).await?;

    Ok(Json(json!({ "data": receipt.payload })))
}
