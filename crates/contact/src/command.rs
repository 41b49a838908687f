use std::sync::Arc;

use anyhow::Context;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::info;
use validator::Validate;

use crate::{Delivery, DeliveryError, DeliveryReceipt, OutboundEmail, SubmissionInput};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("delivery provider error: {0}")]
    Provider(Value),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl From<DeliveryError> for SubmitError {
    fn from(value: DeliveryError) -> Self {
        match value {
            DeliveryError::Provider(payload) => Self::Provider(payload),
            DeliveryError::Transport(err) => Self::Unknown(err),
        }
    }
}

/// Fixed envelope of every notification.
#[derive(Debug, Clone)]
pub struct Mailing {
    pub from: String,
    pub to: Vec<String>,
    pub timezone: String,
}

/// Turns a submission into a delivered notification.
#[derive(Clone)]
pub struct Command {
    delivery: Arc<dyn Delivery>,
    mailing: Mailing,
}

impl Command {
    pub fn new(delivery: Arc<dyn Delivery>, mailing: Mailing) -> Self {
        Self { delivery, mailing }
    }

    /// Validates, composes and sends one submission. Never retried.
    #[tracing::instrument(skip_all, fields(company = %input.company))]
    pub async fn submit(&self, input: SubmissionInput) -> Result<DeliveryReceipt, SubmitError> {
        input.validate()?;

        let composed = crate::compose(&input, OffsetDateTime::now_utc(), &self.mailing.timezone)
            .context("Failed to render contact email")?;

        let receipt = self
            .delivery
            .send(OutboundEmail {
                from: self.mailing.from.to_owned(),
                to: self.mailing.to.clone(),
                reply_to: Some(input.email.trim().to_owned()),
                subject: composed.subject,
                html: composed.html,
                text: composed.text,
            })
            .await?;

        info!(id = %receipt.id, "Contact notification sent");

        Ok(receipt)
    }
}
