use thiserror::Error;
use webhook_entity::WebhookError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the webhook kit CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading, parsing or saving the
    /// webhook configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more configured webhooks failed validation.
    ///
    /// Individual failures are reported as they are found; this error only
    /// carries the count so the process can exit non-zero.
    #[error("{count} webhook(s) failed validation")]
    InvalidWebhooks { count: usize },

    /// A webhook operation failed (ownership ids, encoding).
    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),
}
