//! Domain services used by the HTTP and channel routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own chat and channel logic so route handlers can stay
//! focused on protocol translation and cookie plumbing.

pub mod channel;
pub mod chat;
pub mod identity;
pub mod token;
