use askama::Template;
use chrono::{DateTime, FixedOffset, Locale};
use time::OffsetDateTime;
use time_tz::{ToTimezone, timezones};

use crate::SubmissionInput;

pub const PHONE_PLACEHOLDER: &str = "Non renseigné";

/// Email sent to the operator for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Contact notification HTML template
#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    sent_at: &'a str,
    input: &'a SubmissionInput,
    phone: &'a str,
    inspiration: Option<&'a str>,
    colors: Option<&'a str>,
    additional: Option<&'a str>,
}

/// Contact notification plain text template
#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    sent_at: &'a str,
    input: &'a SubmissionInput,
    phone: &'a str,
    inspiration: Option<&'a str>,
    colors: Option<&'a str>,
    additional: Option<&'a str>,
}

pub fn subject(input: &SubmissionInput) -> String {
    format!("Nouvelle demande de {} - {}", input.name, input.company)
}

/// Renders the notification for an already validated submission.
///
/// Submitted text is escaped in the HTML body and kept verbatim in the text
/// body. Optional blocks are left out when their field is blank.
pub fn compose(
    input: &SubmissionInput,
    at: OffsetDateTime,
    timezone: &str,
) -> Result<ComposedEmail, askama::Error> {
    let sent_at = format_timestamp(at, timezone);
    let phone = match input.phone.trim() {
        "" => PHONE_PLACEHOLDER,
        _ => input.phone.as_str(),
    };

    let html = ContactHtmlTemplate {
        sent_at: &sent_at,
        input,
        phone,
        inspiration: filled(&input.inspiration),
        colors: filled(&input.colors),
        additional: filled(&input.additional),
    }
    .render()?;

    let text = ContactTextTemplate {
        sent_at: &sent_at,
        input,
        phone,
        inspiration: filled(&input.inspiration),
        colors: filled(&input.colors),
        additional: filled(&input.additional),
    }
    .render()?;

    Ok(ComposedEmail {
        subject: subject(input),
        html,
        text,
    })
}

/// Formats `at` the way a French reader expects it, e.g. `18 octobre 2026 à 14:05`.
///
/// Unknown time zone names fall back to UTC.
pub fn format_timestamp(at: OffsetDateTime, timezone: &str) -> String {
    let at = match timezones::get_by_name(timezone) {
        Some(tz) => at.to_timezone(tz),
        None => at,
    };

    let local = FixedOffset::east_opt(at.offset().whole_seconds())
        .zip(DateTime::from_timestamp(at.unix_timestamp(), 0))
        .map(|(offset, utc)| utc.with_timezone(&offset));

    match local {
        Some(local) => local
            .format_localized("%-d %B %Y à %H:%M", Locale::fr_FR)
            .to_string(),
        None => at.to_string(),
    }
}

fn filled(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
