use anyhow::{Context, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::{Delivery, DeliveryError, DeliveryReceipt, OutboundEmail};

/// Client for the Resend transactional email API.
#[derive(Clone)]
pub struct ResendDelivery {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl ResendDelivery {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.resend.com";

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        info!(base_url = %base_url, "Resend delivery initialized");

        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl Delivery for ResendDelivery {
    async fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let request = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach Resend API")?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .with_context(|| format!("Unreadable Resend response (status {status})"))?;

        if !status.is_success() {
            warn!(status = %status, error = %payload, "Resend rejected the email");

            return Err(DeliveryError::Provider(payload));
        }

        let id = payload
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("Resend response has no message id: {payload}"))?;

        info!(id = %id, "Email accepted by Resend");

        Ok(DeliveryReceipt { id, payload })
    }
}
