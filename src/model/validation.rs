//! Request validation shared by the gateway and the server.
//!
//! Body DTOs derive `garde::Validate`; the custom rules below plug into it, and a
//! `garde::Report` is folded into a single `ValidationError::Invalid`. Booking dates are
//! checked separately because the rule spans two fields.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Client-side mistakes detected before any business rule runs. All map to 400.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Body failed its field rules, e.g. `email: not a valid email`.
    #[error("{0}")]
    Invalid(String),

    #[error("The end date can't be earlier than the start date!")]
    EndBeforeStart,

    #[error("The end date can't be equal to the start date!")]
    EndEqualsStart,

    #[error("The start date can't be in the past!")]
    StartInPast,

    #[error("Unknown state: {0}")]
    UnsupportedState(String),

    #[error("Arguments from: {from}, size: {size}.")]
    IllegalPageable { from: i64, size: i64 },

    #[error("Header '{0}' is required")]
    MissingHeader(&'static str),

    #[error("Header '{0}' must be an integer user id")]
    InvalidHeader(&'static str),

    #[error("{0}")]
    Malformed(String),
}

impl ValidationError {
    /// Short category placed in the `reason` field of the error body.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "Validation",
            Self::EndBeforeStart | Self::EndEqualsStart | Self::StartInPast => "Booking dates",
            Self::UnsupportedState(_) => "State parameter",
            Self::IllegalPageable { .. } => "Pageable",
            Self::MissingHeader(_) | Self::InvalidHeader(_) => "Request header",
            Self::Malformed(_) => "Malformed request",
        }
    }
}

impl From<garde::Report> for ValidationError {
    fn from(report: garde::Report) -> Self {
        let message = report
            .iter()
            .map(|(path, error)| format!("{path}: {error}"))
            .collect::<Vec<_>>()
            .join("; ");
        Self::Invalid(message)
    }
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str, _: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

/// Same as [`not_blank`] for patch fields, where `None` means "unchanged".
pub fn not_blank_if_present(value: &Option<String>, ctx: &()) -> garde::Result {
    match value {
        Some(value) => not_blank(value, ctx),
        None => Ok(()),
    }
}

/// Checks that a booking ends strictly after it starts.
pub fn validate_booking_dates(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::EndBeforeStart);
    }
    if end == start {
        return Err(ValidationError::EndEqualsStart);
    }
    Ok(())
}
