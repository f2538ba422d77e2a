//! Minimal client for invoking VK API methods over HTTP.
//!
//! The caller picks a [`Verb`], names a method and supplies [`Params`];
//! [`Client::execute`] returns the raw response body, or an [`Error`] that
//! separates transport failures from errors reported by the API itself.

mod client;
mod config;
mod errors;
mod query;
pub mod types;
mod verb;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::query::{Params, Query, ACCESS_TOKEN_KEY, LANG_KEY, VERSION_KEY};
pub use self::verb::Verb;
