//! Outbound delivery of contact notifications.
//!
//! The endpoint only knows the [`Delivery`] trait; the process entry point
//! picks a provider and hands it over.

use async_trait::async_trait;
use serde_json::Value;

mod log;

pub use log::LogDelivery;

cfg_if::cfg_if! {
    if #[cfg(feature = "resend")] {
        mod resend;

        pub use resend::ResendDelivery;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "smtp")] {
        mod smtp;

        pub use smtp::SmtpDelivery;
    }
}

/// A fully rendered message, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// What the provider answered for an accepted message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub id: String,
    pub payload: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The provider answered and refused the message.
    #[error("provider rejected the email: {0}")]
    Provider(Value),

    /// The provider could not be reached or its answer could not be read.
    #[error("{0}")]
    Transport(#[from] anyhow::Error),
}

#[async_trait]
pub trait Delivery: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError>;
}
