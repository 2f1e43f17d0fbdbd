use serde_json::Value;

use crate::domain::{ApiError, ResponseBody};

/// Normalize a response body. Never fails: non-JSON bodies are kept as text.
pub fn decode_response_body(body: String) -> ResponseBody {
    if body.trim().is_empty() {
        return ResponseBody::Empty;
    }
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(body),
    }
}

/// Build an [`ApiError`] from a non-2xx response.
pub fn decode_api_error(status: u16, body: ResponseBody) -> ApiError {
    // Each field is read on its own; a mistyped one does not hide the others.
    let field = |name: &str| body.as_json().and_then(|value| value.get(name));
    let message = field("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("StackVerify API error ({status})"));
    let code = field("error").and_then(Value::as_str).map(str::to_owned);
    let retry_after = field("retry_after").filter(|value| !value.is_null()).cloned();

    ApiError {
        message,
        status,
        code,
        retry_after,
        response: (!body.is_empty()).then_some(body),
    }
}
