use thiserror::Error;

use crate::auth::AuthError;
use crate::subscriptions::types::BillingCycle;

/// Field-level validation failures on the create path. First failure wins;
/// no partial entity is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    #[error("Amount must be a positive number")]
    InvalidAmount,

    #[error("Invalid billing cycle. Allowed values: {}", BillingCycle::allowed_values())]
    InvalidBillingCycle,

    #[error("Invalid nextBillingDate: {0}")]
    InvalidDate(String),

    #[error("Invalid {field}. Allowed values: {}", .allowed.join(", "))]
    InvalidFieldValue {
        field: &'static str,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// Stable code for the error envelope and telemetry.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields(_) => "MISSING_REQUIRED_FIELDS",
            ValidationError::InvalidAmount => "INVALID_AMOUNT",
            ValidationError::InvalidBillingCycle => "INVALID_BILLING_CYCLE",
            ValidationError::InvalidDate(_) => "INVALID_DATE",
            ValidationError::InvalidFieldValue { .. } => "INVALID_FIELD_VALUE",
        }
    }
}

/// Everything that can stop a create request between authentication and the
/// store call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
