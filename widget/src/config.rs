//! Widget configuration supplied by the hosting page.
//!
//! The page passes a JSON object to `start`. Every field is optional except
//! `token`, which the server issues per page load.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::WidgetError;
use crate::message::RenderMode;

pub const DEFAULT_ENDPOINT: &str = "/chat";
pub const DEFAULT_CHANNEL_PATH: &str = "/channel";
pub const DEFAULT_LIST_ID: &str = "messages";
pub const DEFAULT_FORM_ID: &str = "message-form";
pub const DEFAULT_INPUT_ID: &str = "message";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Path that receives `POST` requests with the raw message text.
    pub endpoint: String,
    /// Path of the WebSocket push channel.
    pub channel_path: String,
    /// Channel token issued by the server for this page load.
    pub token: String,
    pub list_id: String,
    pub form_id: String,
    pub input_id: String,
    pub render_mode: RenderMode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            channel_path: DEFAULT_CHANNEL_PATH.to_owned(),
            token: String::new(),
            list_id: DEFAULT_LIST_ID.to_owned(),
            form_id: DEFAULT_FORM_ID.to_owned(),
            input_id: DEFAULT_INPUT_ID.to_owned(),
            render_mode: RenderMode::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse the page-supplied JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidConfig`] if the JSON does not parse or
    /// no channel token is present.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        if config.token.trim().is_empty() {
            return Err(WidgetError::InvalidConfig("channel token required".to_owned()));
        }
        Ok(config)
    }

    /// Build the absolute WebSocket URL for the push channel.
    ///
    /// `page_href` decides between `ws` and `wss`; `host` is the page's
    /// `host:port`.
    #[must_use]
    pub fn channel_url(&self, page_href: &str, host: &str) -> String {
        let ws_proto = if page_href.starts_with("https") { "wss" } else { "ws" };
        format!("{ws_proto}://{host}{}?token={}", self.channel_path, self.token)
    }
}
