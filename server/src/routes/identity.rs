//! Guest identity cookie.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::identity::ChatUser;

pub const COOKIE_NAME: &str = "chat_user";

/// Read and validate the identity cookie, if any.
pub fn user_from_jar(jar: &CookieJar) -> Option<ChatUser> {
    jar.get(COOKIE_NAME).and_then(|c| ChatUser::from_name(c.value()))
}

/// Build the identity cookie for `user`.
pub fn identity_cookie(user: &ChatUser, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, user.name().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(30))
        .build()
}

/// Chat user taken from the identity cookie.
/// Use as a handler parameter to require an identity.
pub struct CookieUser(pub ChatUser);

impl<S> FromRequestParts<S> for CookieUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        user_from_jar(&jar).map(Self).ok_or(StatusCode::UNAUTHORIZED)
    }
}
