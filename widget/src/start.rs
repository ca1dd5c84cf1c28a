//! WASM entry point called by the hosting page.
//!
//! ```js
//! import init, { start } from "/pkg/chat_widget.js";
//! await init();
//! start(JSON.stringify({ token }));
//! ```

use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::DomView;
use crate::error::WidgetError;
use crate::net::api::HttpSender;
use crate::net::channel::SocketChannel;
use crate::widget::ChatWidget;

/// Mount the chat widget on the current document.
///
/// # Errors
///
/// Rejects with the [`WidgetError`] message if the configuration is invalid,
/// a required element is missing, or the channel cannot be opened.
#[wasm_bindgen]
pub fn start(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = WidgetConfig::from_json(config_json)?;

    let window = web_sys::window().ok_or_else(|| WidgetError::MissingUiElement("window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::MissingUiElement("document".to_owned()))?;

    let view = DomView::from_document(&document, &config)?;
    let location = window.location();
    let href = location.href().unwrap_or_default();
    let host = location.host().unwrap_or_else(|_| "localhost:3000".to_owned());
    let channel = SocketChannel::new(config.channel_url(&href, &host));
    let sender = HttpSender::new(config.endpoint.clone());

    ChatWidget::mount(view, sender, &channel, config.render_mode)?;
    log::info!("chat widget mounted");
    Ok(())
}
