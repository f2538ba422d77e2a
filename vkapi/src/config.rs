//! Immutable per-client configuration.

use std::fmt;

/// Credentials and request defaults sent with every call.
///
/// Fields are fixed at construction; a client never mutates them.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    access_token: String,
    api_version: String,
    language: String,
}

impl ClientConfig {
    pub fn new(
        access_token: impl Into<String>,
        api_version: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            api_version: api_version.into(),
            language: language.into(),
        }
    }

    /// Sent as `access_token`.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Sent as `v`.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Sent as `lang`.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("language", &self.language)
            .finish()
    }
}
