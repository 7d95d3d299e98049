//! Custom headers sent along with a webhook delivery.

use serde::{Deserialize, Serialize};

/// A single header pair.
///
/// Keys need not be unique inside a webhook; duplicates only collapse when
/// the headers are turned into a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header {
    /// Header name
    pub key: String,

    /// Header value
    pub value: String,
}

impl Header {
    /// Create a header pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
