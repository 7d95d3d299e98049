//! HTTP methods a webhook may be delivered with.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;

/// Supported webhook delivery methods.
///
/// Only `POST` is accepted. Parsing is case-insensitive, so `"post"`,
/// `"Post"` and `"POST"` all normalize to [`HttpMethod::Post`].
///
/// # Examples
///
/// ```rust
/// use webhook_entity::HttpMethod;
///
/// assert_eq!(HttpMethod::parse("Post"), Some(HttpMethod::Post));
/// assert_eq!(HttpMethod::parse("get"), None);
/// assert_eq!(HttpMethod::Post.as_str(), "POST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP POST
    Post,
}

impl HttpMethod {
    /// Every method a webhook may use.
    pub const SUPPORTED: &'static [HttpMethod] = &[HttpMethod::Post];

    /// Normalizes a raw method name.
    ///
    /// Returns None if the name isn't a supported method.
    pub fn parse(value: &str) -> Option<Self> {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(value))
    }

    /// Canonical uppercase name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
