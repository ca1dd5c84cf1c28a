use super::*;
use crate::config::ServerConfig;
use crate::state::test_helpers;
use std::time::Duration;
use tokio::time::timeout;

fn user(name: &str) -> ChatUser {
    ChatUser::from_name(name).expect("valid test name")
}

async fn recv(rx: &mut mpsc::Receiver<String>) -> String {
    timeout(Duration::from_millis(200), rx.recv())
        .await
        .expect("push receive timed out")
        .expect("push channel closed unexpectedly")
}

// =============================================================================
// create_channel / connect
// =============================================================================

#[tokio::test]
async fn connect_consumes_token_and_registers_client() {
    let state = test_helpers::test_app_state();
    let token = create_channel(&state, user("alice")).await;

    let sub = connect(&state, &token).await.expect("connect should succeed");

    assert_eq!(sub.user, user("alice"));
    assert!(state.pending.read().await.is_empty());
    assert!(state.clients.read().await.contains_key(&sub.client_id));
}

#[tokio::test]
async fn connect_twice_with_same_token_fails() {
    let state = test_helpers::test_app_state();
    let token = create_channel(&state, user("alice")).await;

    let _first = connect(&state, &token).await.expect("first connect");
    let second = connect(&state, &token).await;

    assert_eq!(second.unwrap_err(), ChannelError::UnknownToken);
    assert_eq!(state.active_client_count().await, 1);
}

#[tokio::test]
async fn connect_unknown_token_fails() {
    let state = test_helpers::test_app_state();
    assert_eq!(connect(&state, "nope").await.unwrap_err(), ChannelError::UnknownToken);
}

#[tokio::test]
async fn connect_expired_token_fails() {
    let config = ServerConfig { token_ttl: Duration::ZERO, ..ServerConfig::default() };
    let state = test_helpers::test_app_state_with(config);
    let token = create_channel(&state, user("alice")).await;

    assert_eq!(connect(&state, &token).await.unwrap_err(), ChannelError::Expired);
    assert_eq!(state.active_client_count().await, 0);
}

#[tokio::test]
async fn create_channel_prunes_expired_tokens() {
    let config = ServerConfig { token_ttl: Duration::ZERO, ..ServerConfig::default() };
    let state = test_helpers::test_app_state_with(config);
    let _ = create_channel(&state, user("alice")).await;
    let latest = create_channel(&state, user("bob")).await;

    let pending = state.pending.read().await;
    assert_eq!(pending.len(), 1);
    assert!(pending.contains_key(&latest));
}

#[tokio::test]
async fn create_channel_caps_pending_tokens() {
    let config = ServerConfig { max_pending: 2, ..ServerConfig::default() };
    let state = test_helpers::test_app_state_with(config);
    let first = create_channel(&state, user("alice")).await;
    let second = create_channel(&state, user("bob")).await;
    let third = create_channel(&state, user("carol")).await;

    let pending = state.pending.read().await;
    assert_eq!(pending.len(), 2);
    assert!(!pending.contains_key(&first));
    assert!(pending.contains_key(&second));
    assert!(pending.contains_key(&third));
}

#[tokio::test]
async fn evicted_token_cannot_connect() {
    let config = ServerConfig { max_pending: 1, ..ServerConfig::default() };
    let state = test_helpers::test_app_state_with(config);
    let stale = create_channel(&state, user("alice")).await;
    let fresh = create_channel(&state, user("alice")).await;

    assert_eq!(connect(&state, &stale).await.unwrap_err(), ChannelError::UnknownToken);
    assert!(connect(&state, &fresh).await.is_ok());
}

#[tokio::test]
async fn each_page_load_gets_its_own_client() {
    let state = test_helpers::test_app_state();
    let t1 = create_channel(&state, user("alice")).await;
    let t2 = create_channel(&state, user("alice")).await;
    assert_ne!(t1, t2);

    let a = connect(&state, &t1).await.unwrap();
    let b = connect(&state, &t2).await.unwrap();
    assert_ne!(a.client_id, b.client_id);
    assert_eq!(state.active_client_count().await, 2);
}

// =============================================================================
// disconnect
// =============================================================================

#[tokio::test]
async fn disconnect_removes_client() {
    let state = test_helpers::test_app_state();
    let (client_id, _rx) = test_helpers::seed_client(&state, "alice", 4).await;

    disconnect(&state, client_id).await;

    assert_eq!(state.active_client_count().await, 0);
}

#[tokio::test]
async fn disconnect_unknown_client_is_noop() {
    let state = test_helpers::test_app_state();
    let _ = test_helpers::seed_client(&state, "alice", 4).await;
    disconnect(&state, Uuid::new_v4()).await;
    assert_eq!(state.active_client_count().await, 1);
}

// =============================================================================
// broadcast
// =============================================================================

#[tokio::test]
async fn broadcast_reaches_every_active_client() {
    let state = test_helpers::test_app_state();
    let (_a, mut rx_a) = test_helpers::seed_client(&state, "alice", 4).await;
    let (_b, mut rx_b) = test_helpers::seed_client(&state, "bob", 4).await;

    assert_eq!(broadcast(&state, "alice: hi").await, 2);

    assert_eq!(recv(&mut rx_a).await, "alice: hi");
    assert_eq!(recv(&mut rx_b).await, "alice: hi");
}

#[tokio::test]
async fn broadcast_preserves_order_per_client() {
    let state = test_helpers::test_app_state();
    let (_a, mut rx) = test_helpers::seed_client(&state, "alice", 8).await;

    for msg in ["p1", "p2", "p3"] {
        broadcast(&state, msg).await;
    }

    assert_eq!(recv(&mut rx).await, "p1");
    assert_eq!(recv(&mut rx).await, "p2");
    assert_eq!(recv(&mut rx).await, "p3");
}

#[tokio::test]
async fn broadcast_skips_full_queue() {
    let state = test_helpers::test_app_state();
    let (_slow, _rx_slow) = test_helpers::seed_client(&state, "slow", 1).await;
    let (_fast, mut rx_fast) = test_helpers::seed_client(&state, "fast", 4).await;

    assert_eq!(broadcast(&state, "one").await, 2);
    assert_eq!(broadcast(&state, "two").await, 1);

    assert_eq!(recv(&mut rx_fast).await, "one");
    assert_eq!(recv(&mut rx_fast).await, "two");
}

#[tokio::test]
async fn broadcast_skips_closed_queue() {
    let state = test_helpers::test_app_state();
    let (_gone, rx_gone) = test_helpers::seed_client(&state, "gone", 4).await;
    drop(rx_gone);

    assert_eq!(broadcast(&state, "hello").await, 0);
}

#[tokio::test]
async fn broadcast_with_no_clients_reaches_nobody() {
    let state = test_helpers::test_app_state();
    assert_eq!(broadcast(&state, "hello").await, 0);
}
