//! Channel token generation.
//!
//! Tokens are single use: connecting the push channel consumes the token, so a
//! leaked page URL cannot be used to attach a second listener.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::fmt::Write;

use rand::Rng;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 16-byte hex channel token.
#[must_use]
pub fn generate_channel_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}
