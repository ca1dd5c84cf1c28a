//! The chat widget.
//!
//! LIFECYCLE
//! =========
//! 1. `mount` opens the channel with the widget itself as the handler, then
//!    binds the form submit listener and focuses the input.
//! 2. Each submission runs `submit_message`.
//! 3. Each channel notification runs `receive_message`.
//!
//! The widget is kept alive by its own listeners for the rest of the page's
//! lifetime. There is no teardown.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::OnceCell;
use std::rc::Rc;

use crate::error::WidgetError;
use crate::message::{Notification, RenderMode};
use crate::net::api::MessageSender;
use crate::net::channel::{Channel, ChannelHandler, Subscription};
use crate::view::{ChatView, SubmitEvent};

pub struct ChatWidget<V, S> {
    view: V,
    sender: S,
    render_mode: RenderMode,
    subscription: OnceCell<Subscription>,
}

impl<V, S> ChatWidget<V, S>
where
    V: ChatView + 'static,
    S: MessageSender + 'static,
{
    /// Build the widget and attach it to `view` and `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ChannelUnavailable`] if the channel cannot be
    /// opened. The form is left untouched in that case.
    pub fn mount(view: V, sender: S, channel: &dyn Channel, render_mode: RenderMode) -> Result<Rc<Self>, WidgetError> {
        let widget = Rc::new(Self { view, sender, render_mode, subscription: OnceCell::new() });

        let handler = Rc::clone(&widget) as Rc<dyn ChannelHandler>;
        let subscription = channel.open(handler)?;
        if widget.subscription.set(subscription).is_err() {
            log::warn!("chat widget: channel already subscribed");
        }

        let on_submit = Rc::clone(&widget);
        widget
            .view
            .bind_submit(Box::new(move |event: &dyn SubmitEvent| on_submit.submit_message(event)));

        widget.view.focus_input();

        Ok(widget)
    }
}

impl<V, S> ChatWidget<V, S>
where
    V: ChatView,
    S: MessageSender,
{
    /// Handle one form submission.
    ///
    /// Default navigation is always suppressed. An empty input is ignored;
    /// otherwise the text is handed to the sender and the input is cleared
    /// and refocused without waiting for the request.
    pub fn submit_message(&self, event: &dyn SubmitEvent) {
        event.prevent_default();

        let text = self.view.input_value();
        if text.is_empty() {
            return;
        }

        self.sender.send(text);
        self.view.set_input_value("");
        self.view.focus_input();
    }

    /// Append one channel payload to the end of the message list.
    pub fn receive_message(&self, notification: &Notification) {
        self.view.append_entry(&notification.data, self.render_mode);
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.get().is_some()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V, S> ChannelHandler for ChatWidget<V, S>
where
    V: ChatView,
    S: MessageSender,
{
    fn on_open(&self) {
        log::debug!("chat channel open");
    }

    fn on_error(&self, detail: &str) {
        log::warn!("chat channel error: {detail}");
    }

    fn on_close(&self) {
        log::debug!("chat channel closed");
    }

    fn on_message(&self, notification: Notification) {
        self.receive_message(&notification);
    }
}
