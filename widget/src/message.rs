//! Channel payloads and how they are rendered.

use serde::Deserialize;

/// A single notification delivered by the push channel.
///
/// The payload is opaque to the widget: any sender name or timestamp is
/// already baked into `data` by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub data: String,
}

impl Notification {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// How a notification payload is placed into its display entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Assign the payload as inner HTML. Markup in the payload is interpreted.
    #[default]
    Markup,
    /// Assign the payload as text content. Markup is shown literally.
    Text,
}
