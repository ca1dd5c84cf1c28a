//! Widget error taxonomy.
//!
//! None of these errors trigger a retry. `SendFailed` and
//! `ChannelUnavailable` are logged where they happen; `MissingUiElement` and
//! `InvalidConfig` abort mounting.

/// Error raised while mounting or running the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// A required DOM element is absent or has the wrong element type.
    #[error("missing ui element: #{0}")]
    MissingUiElement(String),
    /// The outbound message request failed or was rejected.
    #[error("send failed: {0}")]
    SendFailed(String),
    /// The push channel could not be opened.
    #[error("channel unavailable: {0}")]
    ChannelUnavailable(String),
    /// The configuration passed by the hosting page is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
