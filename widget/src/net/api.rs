//! Outbound chat messages.
//!
//! Client-side (hydrate): `POST` via `gloo-net`, spawned as a local task.
//!
//! ERROR HANDLING
//! ==============
//! The submit path never waits for the request. A failed or rejected request
//! is logged as [`WidgetError::SendFailed`] and otherwise dropped; there is no
//! retry.

#[cfg(feature = "hydrate")]
use crate::error::WidgetError;

/// Fire-and-forget delivery of one chat message.
pub trait MessageSender {
    /// Start sending `body`. Returns immediately; the outcome is not reported.
    fn send(&self, body: String);
}

/// Posts the raw message text to a fixed path on the page's origin.
#[derive(Clone, Debug)]
pub struct HttpSender {
    endpoint: String,
}

impl HttpSender {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
impl MessageSender for HttpSender {
    fn send(&self, body: String) {
        let endpoint = self.endpoint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = post_message(&endpoint, body).await {
                log::warn!("{e}");
            }
        });
    }
}

/// `POST {endpoint}` with `body` as raw text. Response body is ignored.
///
/// # Errors
///
/// Returns [`WidgetError::SendFailed`] if the request cannot be built or sent,
/// or the server answers with a non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn post_message(endpoint: &str, body: String) -> Result<(), WidgetError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .body(body)
        .map_err(|e| WidgetError::SendFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| WidgetError::SendFailed(e.to_string()))?;
    if !resp.ok() {
        return Err(WidgetError::SendFailed(format!("{endpoint} answered {}", resp.status())));
    }
    Ok(())
}
