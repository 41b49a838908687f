use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

use super::Transport;
use crate::{INVALID_BODY_MESSAGE, MISSING_FIELDS_MESSAGE, SubmissionInput, SubmissionResult};

/// Posts submissions as JSON to a running contact endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, input: SubmissionInput) -> SubmissionResult {
        let response = match self.client.post(&self.endpoint).json(&input).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, endpoint = %self.endpoint, "Contact endpoint unreachable");
                return SubmissionResult::DeliveryFailed(e.to_string());
            }
        };

        let status = response.status();

        // any 2xx is a delivered email, whatever the body looks like
        if status.is_success() {
            let body = response.json::<Value>().await.unwrap_or_default();
            debug!(%status, %body, "Contact endpoint accepted the submission");

            let id = body["data"]["id"].as_str().unwrap_or_default();
            return SubmissionResult::Accepted(id.to_owned());
        }

        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                return SubmissionResult::DeliveryFailed(format!(
                    "unexpected response ({status}): {e}"
                ));
            }
        };

        debug!(%status, %body, "Contact endpoint answered");

        match body["error"].as_str() {
            Some(message)
                if status == StatusCode::BAD_REQUEST
                    && (message == MISSING_FIELDS_MESSAGE || message == INVALID_BODY_MESSAGE) =>
            {
                SubmissionResult::Rejected(message.to_owned())
            }
            Some(message) => SubmissionResult::DeliveryFailed(message.to_owned()),
            None => SubmissionResult::DeliveryFailed(body["error"].to_string()),
        }
    }
}
