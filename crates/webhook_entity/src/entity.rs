//! Storage seam for persisted records.
//!
//! A persistence collaborator only needs a record's table name and its
//! encoded bytes. Records are encoded as JSON.

use serde::{de::DeserializeOwned, Serialize};

use crate::{WebhookError, WebhookResult};

/// A record that can be written to and read back from storage.
///
/// # Examples
///
/// ```rust
/// use webhook_entity::{Entity, Webhook};
///
/// let webhook = Webhook::new("https://example.com/hook", "POST");
/// let bytes = webhook.to_bytes()?;
/// let decoded = Webhook::from_bytes(&bytes)?;
/// assert_eq!(decoded, webhook);
/// # Ok::<(), webhook_entity::WebhookError>(())
/// ```
pub trait Entity: Serialize + DeserializeOwned {
    /// Name of the table the record is stored in.
    fn table(&self) -> &'static str;

    /// Encode the record's current state.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Serialization` if the record cannot be encoded.
    fn to_bytes(&self) -> WebhookResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| WebhookError::Serialization(e.to_string()))
    }

    /// Decode a record previously produced by [`Entity::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Serialization` if `bytes` is not a valid record.
    fn from_bytes(bytes: &[u8]) -> WebhookResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| WebhookError::Serialization(e.to_string()))
    }
}
