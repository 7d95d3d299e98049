//! Identifier domain types
//!
//! Branded UUID wrappers so a company id can never be passed where a
//! repository id is expected. Every identifier defaults to the nil UUID,
//! which marks it as not yet assigned.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The unassigned (all zero) identifier
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            /// Create an identifier from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse an identifier from its textual UUID form
            ///
            /// # Errors
            /// Returns the underlying `uuid::Error` when `value` is not a UUID.
            pub fn parse(value: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(value).map(Self)
            }

            /// Get the UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// True while the identifier has not been assigned
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::nil()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self::from_uuid(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

uuid_identifier!(
    /// Unique webhook identifier
    ///
    /// Assigned by the caller once the webhook is about to be stored.
    WebhookId
);

uuid_identifier!(
    /// Identifier of the company that owns a webhook
    CompanyId
);

uuid_identifier!(
    /// Identifier of the repository a webhook reports on
    RepositoryId
);
