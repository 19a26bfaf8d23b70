//! API Errors

use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Not running inside a browser window
    #[error("No browser window available")]
    NoWindow,
    /// The request never produced a response
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Wrap a rejected JS promise or thrown value
    pub fn network(value: JsValue) -> Self {
        Self::Network(js_message(&value))
    }

    /// Build a status error from the response body, picking up a `detail` field if present
    pub fn status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").map(detail_text));
        Self::Status { status, detail }
    }

    /// Server-provided detail, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

// Validation errors put a list of objects under `detail`; keep it as JSON text.
fn detail_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Network Error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_http_client_wording() {
        let err = ApiError::status(500, r#"{"detail": "Internal server error"}"#);
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(err.detail(), Some("Internal server error"));
    }

    #[test]
    fn test_status_without_json_body() {
        let err = ApiError::status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_structured_detail_is_kept_as_json() {
        let err = ApiError::status(422, r#"{"detail": [{"loc": ["body", "name"]}]}"#);
        assert_eq!(err.detail(), Some(r#"[{"loc":["body","name"]}]"#));
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response: "));
    }
}
