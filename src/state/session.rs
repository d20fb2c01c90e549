//! Client session state: the raw bearer token, the user decoded from it,
//! and the derived authentication flag.
//!
//! Mutations are synchronous and happen on the UI event loop only. `login`
//! persists the new state to durable storage, `logout` erases it, and
//! `restore` revalidates whatever storage held, once, before the first
//! render.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::jwt;
use crate::util::storage::{self, Envelope, Snapshot};

/// Current authentication state.
///
/// `is_authenticated` always equals `user.is_some()`. A token may be present
/// without a user when its payload failed to decode; the reverse never
/// happens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionState {
    /// Accept a freshly issued token: keep it verbatim, derive the user from
    /// its payload, and persist the result.
    pub fn login(&mut self, token: String) {
        self.user = jwt::decode(&token);
        self.is_authenticated = self.user.is_some();
        self.token = Some(token);
        storage::save(&Envelope::new(self.snapshot()));
    }

    /// Drop all credentials and erase the durable copy.
    pub fn logout(&mut self) {
        *self = Self::default();
        storage::erase();
    }

    /// Rebuild the session from durable storage at process startup.
    ///
    /// A stored token is decoded again rather than trusted; if decoding
    /// fails, the stored envelope is erased and the session starts empty.
    pub fn restore() -> Self {
        match storage::load().map(|envelope| Self::revalidate(&envelope)) {
            Some(Some(state)) => state,
            Some(None) => {
                storage::erase();
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Re-derive a session from a stored envelope.
    ///
    /// Returns `None` when the envelope holds a token whose payload no
    /// longer decodes, signaling the caller to erase the copy. The stored
    /// `user` and flag are recomputed from the token, never trusted.
    fn revalidate(envelope: &Envelope) -> Option<Self> {
        let Some(token) = envelope.state.token.clone() else {
            return Some(Self::default());
        };
        let user = jwt::decode(&token)?;
        Some(Self {
            token: Some(token),
            user: Some(user),
            is_authenticated: true,
        })
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            token: self.token.clone(),
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}
