//! Chat message endpoint.

use axum::extract::State;
use axum::http::StatusCode;

use super::identity::CookieUser;
use crate::services::chat;
use crate::state::AppState;

/// `POST /chat`: broadcast the raw request body as a chat message.
///
/// Empty bodies are accepted and ignored. The widget never inspects the
/// response, so success is always an empty `204`.
pub async fn post_chat(State(state): State<AppState>, CookieUser(user): CookieUser, body: String) -> StatusCode {
    chat::post_message(&state, &user, &body).await;
    StatusCode::NO_CONTENT
}
