use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

/// Message returned to the visitor when a required field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Champs requis manquants";

/// Message returned when the request body cannot be read as a submission.
pub const INVALID_BODY_MESSAGE: &str = "Requête invalide";

/// A contact request as typed by the visitor.
///
/// Every field is a plain string: optional fields are empty when not filled
/// in. Missing keys and `null` values deserialize to empty strings so that
/// the validator, not the parser, reports them. Any other JSON type is a
/// parse error.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SubmissionInput {
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "nullable")]
    pub project: String,
    #[serde(deserialize_with = "nullable")]
    pub inspiration: String,
    #[serde(deserialize_with = "nullable")]
    pub colors: String,
    #[serde(deserialize_with = "nullable")]
    pub additional: String,
}

impl SubmissionInput {
    /// True when name, email, company and project all carry text.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Project => &self.project,
            Field::Inspiration => &self.inspiration,
            Field::Colors => &self.colors,
            Field::Additional => &self.additional,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Phone => self.phone = value,
            Field::Project => self.project = value,
            Field::Inspiration => self.inspiration = value,
            Field::Colors => self.colors = value,
            Field::Additional => self.additional = value,
        }
    }
}

/// Names of the contact form inputs, as used in the HTML form and JSON body.
#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Project,
    Inspiration,
    Colors,
    Additional,
}

impl Field {
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::Company | Field::Project
        )
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
