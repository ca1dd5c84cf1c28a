//! Guest chat identities.
//!
//! There is no login. The first page load assigns a random guest name that is
//! stored in a cookie and used as the sender prefix of every posted message.
//! Cookie values are client-controlled, so names are validated on the way in.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use rand::Rng;

use super::token::bytes_to_hex;

pub const MAX_NAME_LEN: usize = 32;

/// Display identity of a chat participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatUser {
    name: String,
}

impl ChatUser {
    /// Fresh guest identity named `guest-xxxx`.
    #[must_use]
    pub fn guest() -> Self {
        let bytes: [u8; 2] = rand::rng().random();
        Self { name: format!("guest-{}", bytes_to_hex(&bytes)) }
    }

    /// Accept `name` if it is 1..=32 ASCII letters, digits, `-` or `_`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let valid = !name.is_empty()
            && name.len() <= MAX_NAME_LEN
            && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        valid.then(|| Self { name: name.to_owned() })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
