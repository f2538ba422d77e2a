//! Error types for the API client.

use crate::types::RequestParam;

/// Errors that can occur when invoking an API method.
///
/// Only [`Error::Api`] carries the raw response body; every other variant
/// is raised before a usable body exists.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The verb selector was neither GET nor POST. No request was sent.
    #[error("undefined request type: {0}")]
    InvalidVerb(String),
    /// The method name was empty. No request was sent.
    #[error("method name must not be empty")]
    InvalidMethod,
    /// The base URL joined with the method name is not a valid URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request never completed (connection refused, DNS failure, TLS error...).
    #[error(transparent)]
    Transport(reqwest::Error),
    /// The response arrived but its body could not be drained.
    #[error(transparent)]
    Read(reqwest::Error),
    /// The body is not a JSON object matching the error envelope shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// The provider reported a method-level failure.
    #[error("request error. [{code}] {message}")]
    Api {
        code: i64,
        message: String,
        request_params: Vec<RequestParam>,
        /// Raw response body, byte-for-byte as received.
        body: Vec<u8>,
    },
}

impl Error {
    /// Returns true if the provider itself rejected the call.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// The provider's numeric error code, for [`Error::Api`] only.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The raw response body, for [`Error::Api`] only.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}
