//! Push channel websocket.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade request carries `?token=` issued with the page → consume token
//! 2. Client registered as active; pushed messages are forwarded as text frames
//! 3. Close (either side) → client unregistered
//!
//! The channel is one-way. Inbound client frames other than close are ignored.

use std::collections::HashMap;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::services::channel::{self, Subscriber};
use crate::state::AppState;

// =============================================================================
// UPGRADE
// =============================================================================

/// `GET /channel?token=`: open the push channel for an issued token.
pub async fn handle_channel(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(token) = params.get("token") else {
        return (StatusCode::UNAUTHORIZED, "token required").into_response();
    };

    let subscriber = match channel::connect(&state, token).await {
        Ok(sub) => sub,
        Err(e) => {
            warn!(error = %e, "channel: rejected upgrade");
            return (StatusCode::UNAUTHORIZED, e.to_string()).into_response();
        }
    };

    let client_id = subscriber.client_id;
    let failed_state = state.clone();
    ws.on_failed_upgrade(move |e| {
        warn!(%client_id, error = %e, "channel: upgrade failed");
        tokio::spawn(async move { channel::disconnect(&failed_state, client_id).await });
    })
    .on_upgrade(move |socket| run_channel(socket, state, subscriber))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_channel(mut socket: WebSocket, state: AppState, subscriber: Subscriber) {
    let Subscriber { client_id, user, mut rx } = subscriber;
    let active = state.active_client_count().await;
    info!(%client_id, %user, active, "channel: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            pushed = rx.recv() => {
                let Some(text) = pushed else { break };
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    channel::disconnect(&state, client_id).await;
    info!(%client_id, "channel: client disconnected");
}
