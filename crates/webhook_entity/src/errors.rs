//! Webhook entity error types.
//!
//! Identifier, validation and encoding failures. All of them are returned to
//! the caller as values.

use std::fmt;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by webhook operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The supplied repository identifier is not a valid UUID.
    #[error("invalid repository id")]
    InvalidRepositoryId,

    /// The supplied company identifier is not a valid UUID.
    #[error("invalid company id")]
    InvalidCompanyId,

    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The entity could not be encoded or decoded.
    #[error("Failed to serialize entity: {0}")]
    Serialization(String),
}

/// Result type alias for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// A single violated field constraint.
///
/// Renders as `"<field>: <reason>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the field as it appears in the stored record.
    pub field: String,
    /// Human-readable description of the violation.
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every violation found by a validation pass.
///
/// Violations are rendered sorted by field name, joined by `"; "` and
/// terminated by a period:
///
/// ```
/// use webhook_entity::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("url", "must be a valid URL");
/// errors.add("method", "must be a valid value");
/// assert_eq!(
///     errors.to_string(),
///     "method: must be a valid value; url: must be a valid URL."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation for `field`.
    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// True when no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Recorded violations, in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The violation recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let mut sorted: Vec<&FieldError> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.field.cmp(&b.field));

        let joined = sorted
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}.", joined)
    }
}

impl std::error::Error for ValidationErrors {}
