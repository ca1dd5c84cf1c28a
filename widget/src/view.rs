//! Seams between the widget core and the page.
//!
//! `ChatView` stands in for the three DOM handles the widget needs (input
//! field, form, message list). The browser implementation lives in
//! [`crate::dom`]; tests use an in-memory fake.

use crate::message::RenderMode;

/// A form submission event whose default navigation can be suppressed.
pub trait SubmitEvent {
    fn prevent_default(&self);
}

/// Callback invoked on every form submission.
pub type SubmitHandler = Box<dyn Fn(&dyn SubmitEvent)>;

/// The page elements the chat widget drives.
pub trait ChatView {
    /// Current value of the message input.
    fn input_value(&self) -> String;

    fn set_input_value(&self, value: &str);

    fn focus_input(&self);

    /// Create a new display entry holding `content` and append it after the
    /// existing entries of the message list.
    fn append_entry(&self, content: &str, mode: RenderMode);

    /// Register `handler` for submissions of the message form.
    fn bind_submit(&self, handler: SubmitHandler);
}
