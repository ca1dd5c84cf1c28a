//! Network seams: the outbound message sender and the inbound push channel.
//!
//! DESIGN
//! ======
//! Both directions are independent. The sender is fire-and-forget and never
//! reports back to the widget; the channel invokes a [`channel::ChannelHandler`]
//! whenever the transport delivers something.

pub mod api;
pub mod channel;
