use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use serde_json::json;
use tracing::{debug, error, info};
use ulid::Ulid;

use super::{Delivery, DeliveryError, DeliveryReceipt, OutboundEmail};

/// Delivery through an SMTP relay.
#[derive(Clone)]
pub struct SmtpDelivery {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpDelivery {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> anyhow::Result<Self> {
        let mailer = if username.is_empty() || password.is_empty() {
            info!(
                smtp_host = %host,
                smtp_port = port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .port(port)
                .build()
        } else {
            info!(
                smtp_host = %host,
                smtp_port = port,
                "SMTP delivery initialized with authentication and TLS"
            );
            // relay() negotiates STARTTLS
            let creds = Credentials::new(username.to_owned(), password.to_owned());
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .context("Failed to create SMTP transport")?
                .port(port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }

    fn build_message(email: OutboundEmail) -> anyhow::Result<Message> {
        let from: Mailbox = email.from.parse().context("Failed to parse from email")?;
        let mut builder = Message::builder().from(from).subject(email.subject);

        for to in &email.to {
            let to: Mailbox = to
                .parse()
                .with_context(|| format!("Failed to parse to email {to}"))?;
            builder = builder.to(to);
        }

        // the submitter's address is not syntax-checked upstream
        if let Some(reply_to) = email.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => debug!(error = %e, reply_to = %reply_to, "Skipping invalid reply-to"),
            }
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html),
                    ),
            )
            .context("Failed to build email message")
    }
}

#[async_trait]
impl Delivery for SmtpDelivery {
    async fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let message = Self::build_message(email)?;

        match self.mailer.send(message).await {
            Ok(response) => {
                let id = Ulid::new().to_string();
                info!(id = %id, code = %response.code(), "Email accepted by SMTP relay");

                Ok(DeliveryReceipt {
                    payload: json!({
                        "id": id,
                        "code": response.code().to_string(),
                        "message": response.message().collect::<Vec<_>>(),
                    }),
                    id,
                })
            }
            Err(e) if e.is_permanent() || e.is_transient() => {
                error!(error = %e, "SMTP relay rejected the email");

                Err(DeliveryError::Provider(json!({
                    "name": "smtp_error",
                    "code": e.status().map(|code| code.to_string()),
                    "message": e.to_string(),
                })))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Failed to send email via SMTP")
                .into()),
        }
    }
}
