//! Push channel registry.
//!
//! ARCHITECTURE
//! ============
//! Serving the page issues a token (`create_channel`). The browser then opens
//! the channel websocket with that token (`connect`), which consumes it and
//! registers the client as active. Closing the socket unregisters the client
//! (`disconnect`). Chat messages are pushed to every active client
//! (`broadcast`).
//!
//! Delivery is best effort: each client has a bounded queue, and a full or
//! closed queue skips that client rather than blocking the sender.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::identity::ChatUser;
use super::token::generate_channel_token;
use crate::state::{ActiveClient, AppState, PendingChannel};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The token was never issued or has already been used.
    #[error("unknown channel token")]
    UnknownToken,
    /// The token was issued but not connected within the configured TTL.
    #[error("channel token expired")]
    Expired,
}

/// A connected client and the queue of messages pushed to it.
#[derive(Debug)]
pub struct Subscriber {
    pub client_id: Uuid,
    pub user: ChatUser,
    pub rx: mpsc::Receiver<String>,
}

/// Issue a channel token for `user`.
///
/// Expired tokens are pruned on the way. If the pending set is still at
/// `max_pending`, the oldest tokens are evicted to make room.
pub async fn create_channel(state: &AppState, user: ChatUser) -> String {
    let token = generate_channel_token();
    let ttl = state.config.token_ttl;
    let now = Instant::now();

    let mut pending = state.pending.write().await;
    pending.retain(|_, p| now.duration_since(p.issued_at) < ttl);
    while pending.len() >= state.config.max_pending {
        let Some(oldest) = pending.iter().min_by_key(|(_, p)| p.issued_at).map(|(t, _)| t.clone()) else {
            break;
        };
        pending.remove(&oldest);
        warn!("channel: pending token limit reached, evicted oldest");
    }
    pending.insert(token.clone(), PendingChannel { user, issued_at: now });
    token
}

/// Consume `token` and register a new active client.
///
/// # Errors
///
/// Returns [`ChannelError::UnknownToken`] if the token was never issued or
/// was already consumed, and [`ChannelError::Expired`] if it outlived the TTL.
pub async fn connect(state: &AppState, token: &str) -> Result<Subscriber, ChannelError> {
    let pending = state
        .pending
        .write()
        .await
        .remove(token)
        .ok_or(ChannelError::UnknownToken)?;

    if pending.issued_at.elapsed() >= state.config.token_ttl {
        return Err(ChannelError::Expired);
    }

    let client_id = Uuid::new_v4();
    let (tx, rx) = mpsc::channel(state.config.queue_depth);
    state
        .clients
        .write()
        .await
        .insert(client_id, ActiveClient { user: pending.user.clone(), tx });

    debug!(%client_id, user = %pending.user, "channel: connected");
    Ok(Subscriber { client_id, user: pending.user, rx })
}

/// Remove `client_id` from the active set. Unknown ids are ignored.
pub async fn disconnect(state: &AppState, client_id: Uuid) {
    if state.clients.write().await.remove(&client_id).is_some() {
        debug!(%client_id, "channel: disconnected");
    }
}

/// Push `message` to every active client. Returns how many queued it.
pub async fn broadcast(state: &AppState, message: &str) -> usize {
    let clients = state.clients.read().await;
    clients
        .iter()
        .filter(|(client_id, client)| enqueue(**client_id, client, message))
        .count()
}

fn enqueue(client_id: Uuid, client: &ActiveClient, message: &str) -> bool {
    match client.tx.try_send(message.to_owned()) {
        Ok(()) => true,
        Err(mpsc::error::TrySendError::Full(_)) => {
            warn!(%client_id, user = %client.user, "channel: queue full, message skipped");
            false
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            debug!(%client_id, "channel: queue closed, message skipped");
            false
        }
    }
}
