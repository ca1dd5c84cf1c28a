//! Inbound push channel.
//!
//! A [`Channel`] is opened once with a [`ChannelHandler`]. The transport owns
//! connection semantics and delivery order; the only guarantee relied on here
//! is that every delivered notification results in exactly one
//! [`ChannelHandler::on_message`] call carrying that payload.
//!
//! The browser transport is a WebSocket whose text frames are the
//! notification payloads. It is gated behind `#[cfg(feature = "hydrate")]`.

use std::any::Any;
use std::rc::Rc;

use crate::error::WidgetError;
use crate::message::Notification;

/// Receiver of channel lifecycle events and notifications.
pub trait ChannelHandler {
    fn on_open(&self);
    fn on_error(&self, detail: &str);
    fn on_close(&self);
    fn on_message(&self, notification: Notification);
}

/// Keeps an open channel (and any callbacks registered with it) alive.
///
/// Dropping the subscription releases the transport resources it guards.
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl Subscription {
    #[must_use]
    pub fn new<T: 'static>(guard: T) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// A push source that can be subscribed to.
pub trait Channel {
    /// Open the channel and route its events to `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ChannelUnavailable`] if the transport cannot be
    /// opened at all. Later failures arrive through `handler.on_error`.
    fn open(&self, handler: Rc<dyn ChannelHandler>) -> Result<Subscription, WidgetError>;
}

// =============================================================================
// WEBSOCKET TRANSPORT
// =============================================================================

/// Push channel over a browser WebSocket.
#[derive(Clone, Debug)]
pub struct SocketChannel {
    url: String,
}

impl SocketChannel {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "hydrate")]
struct SocketGuard {
    _socket: web_sys::WebSocket,
    _on_open: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    _on_error: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    _on_close: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::CloseEvent)>,
    _on_message: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
}

#[cfg(feature = "hydrate")]
impl Channel for SocketChannel {
    fn open(&self, handler: Rc<dyn ChannelHandler>) -> Result<Subscription, WidgetError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let socket = web_sys::WebSocket::new(&self.url).map_err(|e| {
            WidgetError::ChannelUnavailable(e.as_string().unwrap_or_else(|| format!("cannot open {}", self.url)))
        })?;

        let h = Rc::clone(&handler);
        let on_open = Closure::wrap(Box::new(move |_: web_sys::Event| {
            h.on_open();
        }) as Box<dyn FnMut(web_sys::Event)>);

        let h = Rc::clone(&handler);
        let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
            h.on_error("websocket error");
        }) as Box<dyn FnMut(web_sys::Event)>);

        let h = Rc::clone(&handler);
        let on_close = Closure::wrap(Box::new(move |ev: web_sys::CloseEvent| {
            log::debug!("channel closed: code={} reason={}", ev.code(), ev.reason());
            h.on_close();
        }) as Box<dyn FnMut(web_sys::CloseEvent)>);

        let h = handler;
        let on_message = Closure::wrap(Box::new(move |ev: web_sys::MessageEvent| {
            if let Some(data) = ev.data().as_string() {
                h.on_message(Notification { data });
            } else {
                log::debug!("channel: ignoring non-text frame");
            }
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);

        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        log::debug!("channel: opening {}", self.url);

        Ok(Subscription::new(SocketGuard {
            _socket: socket,
            _on_open: on_open,
            _on_error: on_error,
            _on_close: on_close,
            _on_message: on_message,
        }))
    }
}
