//! Full query assembly: the fixed credential fields followed by the caller's parameters.

use url::{form_urlencoded, Url};

use crate::config::ClientConfig;
use crate::query::Params;

/// Query parameter carrying the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Query parameter carrying the API version.
pub const VERSION_KEY: &str = "v";
/// Query parameter carrying the response language.
pub const LANG_KEY: &str = "lang";

/// The ordered `(key, value)` pairs sent with one call.
///
/// A caller parameter named like one of the fixed fields does not replace
/// it: both pairs are kept and both are encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new(config: &ClientConfig, params: &Params) -> Self {
        let mut pairs = Vec::with_capacity(params.len() + 3);
        pairs.push((ACCESS_TOKEN_KEY.to_string(), config.access_token().to_string()));
        pairs.push((VERSION_KEY.to_string(), config.api_version().to_string()));
        pairs.push((LANG_KEY.to_string(), config.language().to_string()));
        pairs.extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends the pairs to the given URL's query, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(self.pairs.iter());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("tok", "5.199", "en")
    }

    #[test]
    fn fixed_fields_come_first() {
        let query = Query::new(&config(), &Params::new());
        insta::assert_snapshot!(query.encode(), @"access_token=tok&v=5.199&lang=en");
    }

    #[test]
    fn caller_params_follow() {
        let params = Params::new().with("user_ids", "1,2").with("fields", "photo_50");
        let query = Query::new(&config(), &params);
        insta::assert_snapshot!(query.encode(), @"access_token=tok&v=5.199&lang=en&fields=photo_50&user_ids=1%2C2");
    }

    #[test]
    fn colliding_keys_are_duplicated() {
        let params = Params::new().with("v", "5.131");
        let query = Query::new(&config(), &params);
        let versions: Vec<&str> = query
            .pairs()
            .iter()
            .filter(|(k, _)| k == "v")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(versions, vec!["5.199", "5.131"]);
    }

    #[test]
    fn encodes_reserved_characters() {
        let params = Params::new().with("message", "hi & bye");
        let query = Query::new(&config(), &params);
        assert!(query.encode().ends_with("message=hi+%26+bye"));
    }

    #[test]
    fn adds_to_url() {
        let url = Url::parse("https://api.vk.com/method/users.get").unwrap();
        let url = Query::new(&config(), &Params::new().with("user_ids", "1")).add_to_url(&url);
        assert_eq!(url.path(), "/method/users.get");
        assert_eq!(url.query(), Some("access_token=tok&v=5.199&lang=en&user_ids=1"));
    }
}
