//! HTTP client for the VK method-invocation API.

use url::Url;

use crate::{
    config::ClientConfig,
    query::{Params, Query},
    types::ErrorEnvelope,
    Error, Verb,
};

/// Endpoint every method name is appended to.
pub const DEFAULT_BASE_URL: &str = "https://api.vk.com/method";

/// Executes VK API methods.
///
/// Each call sends exactly one request and reads the whole body before
/// returning. No retries and no timeout are configured.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    config: ClientConfig,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production VK API.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, config)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        Url::parse(base_url)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            client,
            config,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The full query that would be sent for `params`.
    pub fn query_for(&self, params: &Params) -> Query {
        Query::new(&self.config, params)
    }

    fn get_url(&self, method: &str) -> Result<Url, Error> {
        if method.is_empty() {
            return Err(Error::InvalidMethod);
        }
        Ok(Url::parse(format!("{}/{}", self.base_api_url, method).as_str())?)
    }

    /// Invokes `method` and returns the raw response body.
    ///
    /// A body whose envelope reports an error yields [`Error::Api`], which
    /// still carries the body. Any body that is not a JSON object yields
    /// [`Error::Decode`], even if it would be a valid method result.
    pub async fn execute(&self, verb: Verb, method: &str, params: &Params) -> Result<Vec<u8>, Error> {
        let url = self.get_url(method)?;
        let query = self.query_for(params);

        tracing::debug!(%verb, method, params = params.len(), "dispatching request");
        let request = match verb {
            Verb::Get => self.client.get(query.add_to_url(&url)),
            Verb::Post => self.client.post(url).form(query.pairs()),
        };
        let resp = request.send().await.map_err(|e| {
            tracing::debug!("Request to {} failed: {}", method, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| {
                tracing::debug!("Failed to read response body: {}", e);
                Error::Read(e)
            })?
            .to_vec();

        let envelope = ErrorEnvelope::from_slice(&body).map_err(|e| {
            tracing::debug!(%status, "Failed to decode response of {}: {}", method, e);
            Error::Decode(e)
        })?;

        if let Some(api_error) = envelope.api_error() {
            tracing::debug!(
                code = api_error.error_code,
                "{} returned an API error: {}",
                method,
                api_error.error_msg
            );
            return Err(Error::Api {
                code: api_error.error_code,
                message: api_error.error_msg.clone(),
                request_params: api_error.request_params.clone(),
                body,
            });
        }

        tracing::debug!(%status, bytes = body.len(), "{} succeeded", method);
        Ok(body)
    }

    /// Invokes `method` with the parameters in the URL query string.
    pub async fn get(&self, method: &str, params: &Params) -> Result<Vec<u8>, Error> {
        self.execute(Verb::Get, method, params).await
    }

    /// Invokes `method` with the parameters in a form-encoded body.
    pub async fn post(&self, method: &str, params: &Params) -> Result<Vec<u8>, Error> {
        self.execute(Verb::Post, method, params).await
    }
}
