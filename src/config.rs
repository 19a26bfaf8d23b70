//! Application Configuration
//!
//! Read from an optional inline JSON block in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   {"api_base_url": "https://api.example.se", "page_size": 20}
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

/// Id of the `<script>` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Largest page size the feature endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path, empty for same-origin
    pub api_base_url: String,
    /// Rows per page on the feature screen
    pub page_size: u32,
    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            page_size: 10,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a config block, normalizing out-of-range values
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(text)?;
        config.page_size = config.page_size.clamp(1, MAX_PAGE_SIZE);
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from the page. A missing block yields the defaults.
    pub fn load() -> Result<Self, serde_json::Error> {
        match read_config_element() {
            Some(text) => Self::from_json(&text),
            None => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(AppConfig::from_json(r#"{"page_size": 0}"#).unwrap().page_size, 1);
        assert_eq!(AppConfig::from_json(r#"{"page_size": 500}"#).unwrap().page_size, 100);
    }

    #[test]
    fn test_trailing_slash_removed_from_base_url() {
        let config = AppConfig::from_json(r#"{"api_base_url": "http://localhost:8000/"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_log_level() {
        let config = AppConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let config = AppConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{page_size: 3").is_err());
    }
}
