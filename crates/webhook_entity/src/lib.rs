//! # Webhook Entity
//!
//! Persistence model for outbound webhook configurations.
//!
//! A [`Webhook`] describes where (URL) and how (HTTP method, headers) an event
//! notification is delivered for a given company and repository. The entity
//! validates its own fields, normalizes the HTTP method, carries its
//! identifiers and encodes itself to bytes for a storage collaborator.
//!
//! ## Examples
//!
//! ```
//! use webhook_entity::{Entity, Header, Webhook, WebhookId};
//!
//! let webhook = Webhook {
//!     url: "https://ci.example.com/hook".to_string(),
//!     method: "post".to_string(),
//!     headers: vec![Header::new("X-Horusec-Authorization", "Bearer token")],
//!     ..Webhook::default()
//! };
//! assert!(webhook.validate().is_ok());
//! assert_eq!(webhook.method_name(), "POST");
//!
//! let company = "0f8fad5b-d9cb-469f-a165-70867728950e";
//! let repository = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
//! let owned = webhook
//!     .set_company_id_and_repository_id(company, repository)?
//!     .set_webhook_id(WebhookId::new());
//!
//! assert_eq!(owned.table(), "webhooks");
//! assert!(!owned.to_bytes()?.is_empty());
//! # Ok::<(), webhook_entity::WebhookError>(())
//! ```
//!
//! ## Error Handling
//!
//! Validation failures are reported as [`ValidationErrors`]; identifier and
//! encoding failures as [`WebhookError`]. Nothing in this crate panics on bad
//! input.

mod errors;

/// The storage seam implemented by persisted records
pub mod entity;

/// Header pairs attached to outbound requests
pub mod header;

/// Branded identifier types (WebhookId, CompanyId, RepositoryId)
pub mod ids;

/// Supported HTTP methods
pub mod method;

/// The webhook record itself
pub mod webhook;

pub use entity::Entity;
pub use errors::{FieldError, ValidationErrors, WebhookError, WebhookResult};
pub use header::Header;
pub use ids::{CompanyId, RepositoryId, WebhookId};
pub use method::HttpMethod;
pub use webhook::Webhook;
