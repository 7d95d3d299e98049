//! Webhook record
//!
//! The configuration of an outbound HTTP callback owned by a company and a
//! repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};
use url::Url;

use crate::{
    CompanyId, Entity, Header, HttpMethod, RepositoryId, ValidationErrors, WebhookError,
    WebhookId, WebhookResult,
};

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;

/// Webhook configuration.
///
/// Built directly from field values by the caller. Nothing is checked on
/// construction; call [`Webhook::validate`] before storing.
///
/// # Examples
///
/// ```rust
/// use webhook_entity::{Header, Webhook};
///
/// let webhook = Webhook {
///     url: "http://example.com".to_string(),
///     method: "GET".to_string(),
///     headers: vec![Header::new("X-Horusec-Authorization", "Bearer token")],
///     ..Webhook::default()
/// };
///
/// assert!(webhook.webhook_id.is_nil());
/// assert_eq!(webhook.method_name(), "");
/// assert_eq!(
///     webhook.validate().unwrap_err().to_string(),
///     "method: must be a valid value."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    /// Storage identifier, nil until assigned
    #[serde(rename = "webhookID")]
    pub webhook_id: WebhookId,

    /// Free text shown to users
    pub description: String,

    /// Target URL of the callback
    pub url: String,

    /// Raw HTTP method, normalized through [`HttpMethod`]
    pub method: String,

    /// Custom headers sent with every delivery
    pub headers: Vec<Header>,

    /// Repository the webhook reports on
    #[serde(rename = "repositoryID")]
    pub repository_id: RepositoryId,

    /// Company owning the webhook
    #[serde(rename = "companyID")]
    pub company_id: CompanyId,

    /// When the webhook was created
    pub created_at: DateTime<Utc>,

    /// When the webhook was last changed
    pub updated_at: DateTime<Utc>,
}

impl Webhook {
    /// Table webhooks are stored in.
    pub const TABLE: &'static str = "webhooks";

    /// Creates a webhook with both timestamps set to now.
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            url: url.into(),
            method: method.into(),
            created_at: now,
            updated_at: now,
            ..Self::default()
        }
    }

    /// The normalized delivery method, or None if the raw value is unsupported.
    pub fn method(&self) -> Option<HttpMethod> {
        HttpMethod::parse(&self.method)
    }

    /// Canonical uppercase method name.
    ///
    /// Returns an empty string when the raw method is unsupported.
    pub fn method_name(&self) -> &'static str {
        self.method().map_or("", |method| method.as_str())
    }

    /// Headers as a key/value map. The last pair wins for duplicate keys.
    pub fn headers_map(&self) -> HashMap<String, String> {
        self.headers
            .iter()
            .map(|header| (header.key.clone(), header.value.clone()))
            .collect()
    }

    /// Validates the webhook configuration.
    ///
    /// # Validation Rules
    /// - `url`: not empty, and parses as an absolute URL (any scheme)
    /// - `method`: not empty, and normalizes to a supported [`HttpMethod`]
    ///
    /// Ownership identifiers are not checked.
    ///
    /// # Errors
    /// Returns every violated rule, not only the first one.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.url.is_empty() {
            errors.add("url", "cannot be blank");
        } else if Url::parse(&self.url).is_err() {
            errors.add("url", "must be a valid URL");
        }

        if self.method.is_empty() {
            errors.add("method", "cannot be blank");
        } else if self.method().is_none() {
            errors.add("method", "must be a valid value");
        }

        if errors.is_empty() {
            debug!(message = "Webhook is valid", webhook_id = %self.webhook_id);
            Ok(())
        } else {
            debug!(
                message = "Webhook failed validation",
                webhook_id = %self.webhook_id,
                error_count = errors.len()
            );
            Err(errors)
        }
    }

    /// Returns a copy of the webhook owned by the given company and repository.
    ///
    /// The repository id is parsed first, so it is the one reported when both
    /// values are malformed. `self` is left untouched.
    ///
    /// # Errors
    /// - `WebhookError::InvalidRepositoryId` if `repository_id` is not a UUID
    /// - `WebhookError::InvalidCompanyId` if `company_id` is not a UUID
    pub fn set_company_id_and_repository_id(
        &self,
        company_id: &str,
        repository_id: &str,
    ) -> WebhookResult<Webhook> {
        let repository_id = RepositoryId::parse(repository_id).map_err(|e| {
            warn!(message = "Rejected repository id", value = repository_id, error = %e);
            WebhookError::InvalidRepositoryId
        })?;

        let company_id = CompanyId::parse(company_id).map_err(|e| {
            warn!(message = "Rejected company id", value = company_id, error = %e);
            WebhookError::InvalidCompanyId
        })?;

        debug!(
            message = "Assigned webhook owner",
            company_id = %company_id,
            repository_id = %repository_id
        );

        Ok(Webhook {
            repository_id,
            company_id,
            ..self.clone()
        })
    }

    /// Assigns the storage identifier, replacing any previous one.
    pub fn set_webhook_id(self, webhook_id: WebhookId) -> Webhook {
        debug!(message = "Assigned webhook id", webhook_id = %webhook_id);
        Webhook { webhook_id, ..self }
    }

    /// Marks the webhook as changed now.
    pub fn touch(self) -> Webhook {
        Webhook {
            updated_at: Utc::now(),
            ..self
        }
    }
}

impl Entity for Webhook {
    fn table(&self) -> &'static str {
        Self::TABLE
    }
}
