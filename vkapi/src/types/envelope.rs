//! The error envelope VK embeds in otherwise successful HTTP responses.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level shape every response body is decoded into.
///
/// Success payloads (`{"response": ...}`) decode to an envelope with no
/// `error`, which is how success is told apart from failure.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}

/// A `null` in any field decodes the same as a missing field.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_msg: String,
    /// Echo of the parameters the provider received. Never fails the decode:
    /// entries that are not `{key, value}` objects are skipped.
    #[serde(default, deserialize_with = "lenient_request_params")]
    pub request_params: Vec<RequestParam>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestParam {
    pub key: String,
    pub value: String,
}

impl RequestParam {
    /// Scalar keys and values are kept as text; `null` values become empty.
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            key: scalar_text(object.get("key")?)?,
            value: match object.get("value") {
                Some(v) => scalar_text(v)?,
                None => String::new(),
            },
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_request_params<'de, D>(deserializer: D) -> Result<Vec<RequestParam>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(RequestParam::from_value).collect(),
        _ => Vec::new(),
    })
}

impl ErrorEnvelope {
    /// Decodes a raw response body.
    ///
    /// The body must be a JSON object. Arrays, scalars and non-JSON text
    /// are rejected even when they would be a valid method result.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// The reported error, if its message is non-empty.
    pub fn api_error(&self) -> Option<&ApiErrorBody> {
        self.error.as_ref().filter(|e| !e.error_msg.is_empty())
    }
}
