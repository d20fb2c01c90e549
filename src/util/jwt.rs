//! Advisory JWT payload decoding.
//!
//! Splits a bearer token on `.` and parses the middle segment as URL-safe
//! base64 JSON, mapping the `sub` and `role` claims to a [`User`]. The
//! signature is never verified; the result only decides what the client
//! renders and must not be treated as a trust boundary.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::{Role, User};

/// Claims this client cares about; everything else in the payload is ignored.
#[derive(Deserialize)]
struct Claims {
    sub: String,
    role: Role,
}

/// Decode the payload segment of `token` into a [`User`].
///
/// Returns `None` on any malformed input: wrong segment count, invalid
/// base64, invalid JSON, or missing/unknown claims. Failures are logged and
/// never propagated to the caller.
pub fn decode(token: &str) -> Option<User> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        log::warn!("failed to decode token: expected 3 segments, got {}", segments.len());
        return None;
    }

    let payload = match URL_SAFE_NO_PAD.decode(segments[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("failed to decode token payload: {e}");
            return None;
        }
    };

    match serde_json::from_slice::<Claims>(&payload) {
        Ok(claims) => Some(User {
            username: claims.sub,
            role: claims.role,
        }),
        Err(e) => {
            log::warn!("failed to parse token claims: {e}");
            None
        }
    }
}
