use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use webpro_contact::{
    Field, SubmissionResult,
    form::{ContactForm, HttpTransport},
};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Contact endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:3000/api/contact")]
    pub url: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub company: String,

    /// Project description
    #[arg(long)]
    pub project: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Websites the visitor likes
    #[arg(long, default_value = "")]
    pub inspiration: String,

    #[arg(long, default_value = "")]
    pub colors: String,

    #[arg(long, default_value = "")]
    pub additional: String,
}

impl SubmitArgs {
    fn fields(self) -> [(Field, String); 8] {
        [
            (Field::Name, self.name),
            (Field::Email, self.email),
            (Field::Company, self.company),
            (Field::Phone, self.phone),
            (Field::Project, self.project),
            (Field::Inspiration, self.inspiration),
            (Field::Colors, self.colors),
            (Field::Additional, self.additional),
        ]
    }
}

/// Sends one contact request through the form controller, the way the
/// landing page does.
#[tracing::instrument(skip_all, fields(url = %args.url))]
pub async fn submit(args: SubmitArgs) -> Result<()> {
    let form = ContactForm::new(Arc::new(HttpTransport::new(args.url.to_owned())));

    for (field, value) in args.fields() {
        form.set_field(field, value).await;
    }

    match form.submit().await {
        Some(SubmissionResult::Accepted(id)) => {
            tracing::info!(id = %id, "Contact request accepted");
            println!("{id}");
            Ok(())
        }
        Some(SubmissionResult::Rejected(reason)) => bail!("Contact request rejected: {reason}"),
        Some(SubmissionResult::DeliveryFailed(cause)) => {
            bail!("Contact request failed: {cause}")
        }
        None => bail!("A submission is already in progress"),
    }
}
