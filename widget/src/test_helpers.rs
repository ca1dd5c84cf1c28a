//! In-memory stand-ins for the page, the sender, and the channel.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::WidgetError;
use crate::message::{Notification, RenderMode};
use crate::net::api::MessageSender;
use crate::net::channel::{Channel, ChannelHandler, Subscription};
use crate::view::{ChatView, SubmitEvent, SubmitHandler};

/// Records everything the widget does to the page.
#[derive(Default)]
pub struct FakeView {
    pub input: RefCell<String>,
    pub focus_count: Cell<usize>,
    pub entries: RefCell<Vec<(String, RenderMode)>>,
    /// Submit bindings made on this view. Outlives the view itself.
    pub bind_count: Rc<Cell<usize>>,
    submit: RefCell<Option<SubmitHandler>>,
}

impl FakeView {
    pub fn with_entries(entries: &[&str]) -> Self {
        let view = Self::default();
        view.entries
            .borrow_mut()
            .extend(entries.iter().map(|e| ((*e).to_owned(), RenderMode::Markup)));
        view
    }

    /// Type `text` into the input and submit the form.
    pub fn submit(&self, text: &str, event: &FakeEvent) {
        *self.input.borrow_mut() = text.to_owned();
        let handler = self.submit.borrow();
        let handler = handler.as_ref().expect("submit handler should be bound");
        handler(event);
    }

    pub fn has_submit_handler(&self) -> bool {
        self.submit.borrow().is_some()
    }

    pub fn entry_texts(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(text, _)| text.clone()).collect()
    }
}

impl ChatView for FakeView {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn set_input_value(&self, value: &str) {
        *self.input.borrow_mut() = value.to_owned();
    }

    fn focus_input(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }

    fn append_entry(&self, content: &str, mode: RenderMode) {
        self.entries.borrow_mut().push((content.to_owned(), mode));
    }

    fn bind_submit(&self, handler: SubmitHandler) {
        self.bind_count.set(self.bind_count.get() + 1);
        *self.submit.borrow_mut() = Some(handler);
    }
}

/// Captures every body handed to the sender.
#[derive(Clone, Default)]
pub struct FakeSender {
    pub sent: Rc<RefCell<Vec<String>>>,
}

impl MessageSender for FakeSender {
    fn send(&self, body: String) {
        self.sent.borrow_mut().push(body);
    }
}

#[derive(Default)]
pub struct FakeEvent {
    pub prevented: Cell<bool>,
}

impl SubmitEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

/// Channel that hands its handler back to the test for manual delivery.
#[derive(Default)]
pub struct FakeChannel {
    pub handler: RefCell<Option<Rc<dyn ChannelHandler>>>,
    pub open_count: Cell<usize>,
    pub fail: bool,
}

impl FakeChannel {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn deliver(&self, data: &str) {
        let handler = self.handler.borrow().clone().expect("channel should be open");
        handler.on_message(Notification::new(data));
    }

    pub fn handler(&self) -> Rc<dyn ChannelHandler> {
        self.handler.borrow().clone().expect("channel should be open")
    }
}

impl Channel for FakeChannel {
    fn open(&self, handler: Rc<dyn ChannelHandler>) -> Result<Subscription, WidgetError> {
        self.open_count.set(self.open_count.get() + 1);
        if self.fail {
            return Err(WidgetError::ChannelUnavailable("refused".to_owned()));
        }
        *self.handler.borrow_mut() = Some(handler);
        Ok(Subscription::new(()))
    }
}
