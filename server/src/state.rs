//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed config, channel tokens waiting to be connected, and the
//! active clients currently subscribed to the push channel. Nothing is
//! persisted: a restart forgets every channel.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::services::identity::ChatUser;

// =============================================================================
// CHANNELS
// =============================================================================

/// A channel token issued to a page load, not yet connected.
#[derive(Debug, Clone)]
pub struct PendingChannel {
    pub user: ChatUser,
    pub issued_at: Instant,
}

/// A connected channel client. Pushed messages go through `tx`.
#[derive(Debug, Clone)]
pub struct ActiveClient {
    pub user: ChatUser,
    pub tx: mpsc::Sender<String>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is required by Axum; all inner fields are
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Issued channel tokens keyed by token.
    pub pending: Arc<RwLock<HashMap<String, PendingChannel>>>,
    /// Connected clients keyed by `client_id`.
    pub clients: Arc<RwLock<HashMap<Uuid, ActiveClient>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            pending: Arc::new(RwLock::new(HashMap::new())),
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn active_client_count(&self) -> usize {
        self.clients.read().await.len()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
