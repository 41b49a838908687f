use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use ulid::Ulid;

use super::{Delivery, DeliveryError, DeliveryReceipt, OutboundEmail};

/// Delivery that only logs the message (local development, demos).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait]
impl Delivery for LogDelivery {
    async fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let id = Ulid::new().to_string();

        info!(
            id = %id,
            from = %email.from,
            to = ?email.to,
            subject = %email.subject,
            "Log delivery: skipping actual send"
        );
        tracing::debug!(body = %email.text, "Log delivery: message body");

        Ok(DeliveryReceipt {
            payload: json!({ "id": id }),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_delivery_returns_receipt_with_id() {
        let receipt = LogDelivery
            .send(OutboundEmail {
                from: "WebPro <onboarding@resend.dev>".to_owned(),
                to: vec!["contact@webpro.localhost".to_owned()],
                reply_to: None,
                subject: "Nouvelle demande de Jean - ACME".to_owned(),
                html: "<p>hello</p>".to_owned(),
                text: "hello".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.payload["id"], receipt.id.as_str());
        assert_eq!(receipt.id.len(), 26);
    }
}
