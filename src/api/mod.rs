//! REST API Client
//!
//! Thin JSON-over-fetch transport, organized by domain.

mod dashboard;
mod features;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ApiError;

// Re-export all public items
pub use dashboard::*;
pub use features::*;

/// Characters left unescaped in query components
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Join base URL, path and query parameters
pub fn build_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&utf8_percent_encode(key, QUERY_VALUE).to_string());
        url.push('=');
        url.push_str(&utf8_percent_encode(value, QUERY_VALUE).to_string());
    }
    url
}

/// Escape a single path segment
pub fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decode a successful response body
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = send("GET", url, None).await?;
    decode(&body)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, payload: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(payload)?;
    let text = send("POST", url, Some(body)).await?;
    decode(&text)
}

/// Issue a request and return the body text of a 2xx response
async fn send(method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(ApiError::network)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(ApiError::network)?;
    }

    log::debug!("[API] {} {}", method, url);
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?
        .dyn_into()
        .map_err(ApiError::network)?;

    let text = JsFuture::from(response.text().map_err(ApiError::network)?)
        .await
        .map_err(ApiError::network)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        let err = ApiError::status(response.status(), &text);
        log::warn!(
            "[API] {} {} -> {} {}",
            method,
            url,
            response.status(),
            err.detail().unwrap_or("")
        );
        return Err(err);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(build_url("", "/api/v1/dashboard/progress", &[]), "/api/v1/dashboard/progress");
    }

    #[test]
    fn test_build_url_joins_and_escapes() {
        let url = build_url(
            "http://localhost:8000/",
            "/api/v1/dashboard/progress/details",
            &[("time_period", "all".to_string()), ("category", "a&b c".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:8000/api/v1/dashboard/progress/details?time_period=all&category=a%26b%20c"
        );
    }

    #[test]
    fn test_path_segment_escapes_slashes() {
        assert_eq!(path_segment("a/b"), "a%2Fb");
        assert_eq!(path_segment("3fa85f64-5717"), "3fa85f64-5717");
    }
}
