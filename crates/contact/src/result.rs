use crate::{DeliveryReceipt, MISSING_FIELDS_MESSAGE, SubmitError};

/// Outcome of one submission as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Carries the delivery reference id.
    Accepted(String),
    /// Carries the validation failure description.
    Rejected(String),
    DeliveryFailed(String),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }
}

impl From<Result<DeliveryReceipt, SubmitError>> for SubmissionResult {
    fn from(value: Result<DeliveryReceipt, SubmitError>) -> Self {
        match value {
            Ok(receipt) => Self::Accepted(receipt.id),
            Err(SubmitError::Validate(_)) => Self::Rejected(MISSING_FIELDS_MESSAGE.to_owned()),
            Err(SubmitError::Provider(payload)) => Self::DeliveryFailed(payload.to_string()),
            Err(SubmitError::Unknown(err)) => Self::DeliveryFailed(err.to_string()),
        }
    }
}
