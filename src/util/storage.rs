//! Durable session persistence in `localStorage`.
//!
//! One fixed key holds a JSON envelope `{ "state": { ... }, "version": N }`
//! mirroring the current session. Encoding and decoding are pure so the
//! envelope format is testable off-browser; the actual storage calls need a
//! browser environment and are stubbed out otherwise.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// localStorage key owning the persisted session envelope.
pub const STORAGE_KEY: &str = "bakehouse-session";

/// Envelope schema version written alongside each snapshot.
pub const VERSION: u32 = 0;

/// Persisted wrapper around a session snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub state: Snapshot,
    pub version: u32,
}

impl Envelope {
    pub fn new(state: Snapshot) -> Self {
        Self {
            state,
            version: VERSION,
        }
    }
}

/// The three persisted session fields.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Serialize an envelope to its stored JSON form.
pub fn encode(envelope: &Envelope) -> Option<String> {
    serde_json::to_string(envelope).ok()
}

/// Parse a stored JSON envelope. Returns `None` if it no longer parses.
pub fn decode(raw: &str) -> Option<Envelope> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted envelope, if any.
///
/// A stored copy that no longer parses is removed on the spot rather than
/// left to fail again on the next startup.
pub fn load() -> Option<Envelope> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match decode(&raw) {
            Some(envelope) => Some(envelope),
            None => {
                log::warn!("discarding unreadable session envelope");
                let _ = storage.remove_item(STORAGE_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the envelope under the fixed key, replacing any previous copy.
pub fn save(envelope: &Envelope) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(json) = encode(envelope) {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = envelope;
    }
}

/// Remove the persisted envelope entirely.
pub fn erase() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
