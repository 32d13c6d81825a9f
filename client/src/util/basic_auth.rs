//! HTTP basic-auth header construction for teacher login.

#[cfg(test)]
#[path = "basic_auth_test.rs"]
mod basic_auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Build the `Authorization` header value for `username:password`.
#[must_use]
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
