//! Hosting page for the chat widget.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use super::identity::{identity_cookie, user_from_jar};
use crate::services::{channel, identity::ChatUser};
use crate::state::AppState;

/// `GET /`: ensure a guest identity, issue a channel token, render the page.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (user, jar) = match user_from_jar(&jar) {
        Some(user) => (user, jar),
        None => {
            let user = ChatUser::guest();
            let jar = jar.add(identity_cookie(&user, state.config.cookie_secure));
            info!(%user, "index: new guest identity");
            (user, jar)
        }
    };

    let token = channel::create_channel(&state, user).await;
    (jar, Html(render_page(&token)))
}

/// Render the page carrying the three widget elements and the bootstrap
/// script configured with `token`.
#[must_use]
pub fn render_page(token: &str) -> String {
    let config = serde_json::json!({ "token": token }).to_string().replace('<', "\\u003c");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Chat</title>
  </head>
  <body>
    <div id="messages"></div>
    <form id="message-form" autocomplete="off">
      <input id="message" type="text" placeholder="Message...">
      <button type="submit">Send</button>
    </form>
    <script type="module">
      import init, {{ start }} from "/pkg/chat_widget.js";
      await init();
      start(JSON.stringify({config}));
    </script>
  </body>
</html>
"#
    )
}
