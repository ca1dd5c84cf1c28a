//! Browser chat widget.
//!
//! This crate is compiled to WebAssembly and runs in the hosting page. It wires
//! a message form to an HTTP `POST` endpoint and appends every notification
//! pushed down the server channel to the message list.
//!
//! The widget core ([`widget::ChatWidget`]) only talks to small traits, so it
//! is exercised natively in unit tests. The DOM, HTTP and WebSocket bindings
//! behind those traits are gated on the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | `ChatWidget`: submit-message and receive-message |
//! | [`view`] | `ChatView` seam over the three DOM handles |
//! | [`net`] | Outbound sender and inbound channel seams |
//! | [`message`] | Notification payload and render mode |
//! | [`config`] | `WidgetConfig` passed in by the hosting page |
//! | [`error`] | `WidgetError` taxonomy |

pub mod config;
pub mod error;
pub mod message;
pub mod net;
pub mod view;
pub mod widget;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod start;

#[cfg(test)]
mod test_helpers;
