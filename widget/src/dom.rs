//! Browser implementation of [`ChatView`] over `web-sys` handles.
//!
//! Requires a browser environment; compiled only with the `hydrate` feature.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::message::RenderMode;
use crate::view::{ChatView, SubmitEvent, SubmitHandler};

impl SubmitEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Handles to the three elements the widget drives.
pub struct DomView {
    document: Document,
    list: Element,
    form: HtmlFormElement,
    input: HtmlInputElement,
}

impl DomView {
    /// Look up the message list, form, and input by the configured ids.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingUiElement`] naming the first id that is
    /// absent or not of the expected element type.
    pub fn from_document(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        let list = lookup::<Element>(document, &config.list_id)?;
        let form = lookup::<HtmlFormElement>(document, &config.form_id)?;
        let input = lookup::<HtmlInputElement>(document, &config.input_id)?;
        Ok(Self { document: document.clone(), list, form, input })
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| WidgetError::MissingUiElement(id.to_owned()))
}

impl ChatView for DomView {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_input_value(&self, value: &str) {
        self.input.set_value(value);
    }

    fn focus_input(&self) {
        let _ = self.input.focus();
    }

    fn append_entry(&self, content: &str, mode: RenderMode) {
        let Ok(entry) = self.document.create_element("div") else {
            log::warn!("chat widget: cannot create message entry");
            return;
        };
        match mode {
            RenderMode::Markup => entry.set_inner_html(content),
            RenderMode::Text => entry.set_text_content(Some(content)),
        }
        if self.list.append_child(&entry).is_err() {
            log::warn!("chat widget: cannot append message entry");
        }
    }

    fn bind_submit(&self, handler: SubmitHandler) {
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            handler(&ev);
        }) as Box<dyn FnMut(web_sys::Event)>);

        if self
            .form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("chat widget: cannot bind submit listener");
        }
        // Listener lives as long as the page.
        cb.forget();
    }
}
