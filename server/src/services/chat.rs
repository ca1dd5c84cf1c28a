//! Chat message posting.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use tracing::info;

use super::channel;
use super::identity::ChatUser;
use crate::state::AppState;

/// Prefix `message` with the sender's name.
#[must_use]
pub fn format_message(user: &ChatUser, message: &str) -> String {
    format!("{user}: {message}")
}

/// Broadcast `message` from `user` to every active client.
///
/// Empty messages are ignored. Returns the number of clients the formatted
/// message was queued for.
pub async fn post_message(state: &AppState, user: &ChatUser, message: &str) -> usize {
    if message.is_empty() {
        return 0;
    }

    let formatted = format_message(user, message);
    let delivered = channel::broadcast(state, &formatted).await;
    info!(%user, len = message.len(), delivered, "chat: message posted");
    delivered
}
