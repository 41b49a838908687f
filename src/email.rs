use std::sync::Arc;

use anyhow::Result;
use webpro_contact::{Command, Delivery, LogDelivery, Mailing, ResendDelivery, SmtpDelivery};

use crate::config::{EmailConfig, EmailProvider};

/// Builds the delivery collaborator selected by configuration.
pub fn delivery(config: &EmailConfig) -> Result<Arc<dyn Delivery>> {
    tracing::info!(provider = %config.provider, "Configuring email delivery");

    let delivery: Arc<dyn Delivery> = match config.provider {
        EmailProvider::Resend => Arc::new(ResendDelivery::new(
            &config.resend_api_key,
            &config.resend_base_url,
        )),
        EmailProvider::Smtp => Arc::new(SmtpDelivery::new(
            &config.smtp_host,
            config.smtp_port,
            &config.smtp_username,
            &config.smtp_password,
        )?),
        EmailProvider::Log => Arc::new(LogDelivery),
    };

    Ok(delivery)
}

pub fn mailing(config: &EmailConfig) -> Mailing {
    Mailing {
        from: config.from.to_owned(),
        to: config
            .to
            .iter()
            .map(|to| to.trim().to_owned())
            .filter(|to| !to.is_empty())
            .collect(),
        timezone: config.timezone.to_owned(),
    }
}

pub fn contact_command(config: &EmailConfig) -> Result<Command> {
    Ok(Command::new(delivery(config)?, mailing(config)))
}
