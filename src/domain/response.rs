use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Response body after normalization.
///
/// Bodies that are not valid JSON are kept as text instead of failing the call.
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ResponseBody {
    /// The parsed JSON value, if the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Collapse into a JSON value: text becomes a JSON string, an empty body `null`.
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
            Self::Empty => Value::Null,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Deserialize the body into a caller-defined type.
    ///
    /// An empty body deserializes as JSON `null`; a text body fails with the
    /// underlying JSON syntax error.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => T::deserialize(value),
            Self::Text(text) => serde_json::from_str(text),
            Self::Empty => serde_json::from_value(Value::Null),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Non-2xx response from StackVerify.
pub struct ApiError {
    /// `message` from the body, or a generic message naming the status.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable `error` code from the body.
    pub code: Option<String>,
    /// `retry_after` hint from the body, passed through as sent.
    pub retry_after: Option<Value>,
    /// Normalized body; `None` when the server sent nothing.
    pub response: Option<ResponseBody>,
}

impl ApiError {
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// `retry_after` as whole seconds when the server sent a non-negative number
    /// (or a numeric string).
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self.retry_after.as_ref()? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
