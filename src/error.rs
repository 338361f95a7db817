use serde::Serialize;
use thiserror::Error;

/// Raised when a profile, preference set, weight table or filter violates
/// its range or type constraints.
///
/// Scoring never clamps bad input into a plausible-looking result; it
/// returns this error instead so upstream data problems surface.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("invalid {entity}.{field}: {reason}")]
pub struct InvalidInputError {
    pub entity: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            entity,
            field,
            reason: reason.into(),
        }
    }
}

/// Reject non-finite or non-positive amounts (rates, budgets)
pub(crate) fn ensure_positive(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::new(entity, field, format!("must be finite, got {}", value)));
    }
    if value <= 0.0 {
        return Err(InvalidInputError::new(entity, field, format!("must be positive, got {}", value)));
    }
    Ok(())
}
