use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::Role;

fn token_for(sub: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{sub}","role":"{role}"}}"#));
    format!("{header}.{payload}.signature")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_empty() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_with_decodable_token_authenticates() {
    let mut state = SessionState::default();
    state.login(token_for("alice", "user"));
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
    assert!(state.token.is_some());
}

#[test]
fn login_keeps_token_even_when_decode_fails() {
    let mut state = SessionState::default();
    state.login("garbage".to_owned());
    assert_eq!(state.token.as_deref(), Some("garbage"));
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

#[test]
fn logout_clears_everything() {
    let mut state = SessionState::default();
    state.login(token_for("alice", "user"));
    state.logout();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Envelope revalidation
// =============================================================

#[test]
fn snapshot_round_trip_preserves_identity() {
    let mut state = SessionState::default();
    state.login(token_for("bob", "admin"));

    let json = storage::encode(&Envelope::new(state.snapshot())).expect("encode");
    let envelope = storage::decode(&json).expect("decode");
    let restored = SessionState::revalidate(&envelope).expect("revalidate");

    assert_eq!(restored, state);
    assert_eq!(restored.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn revalidate_rejects_undecodable_token() {
    let envelope = Envelope::new(Snapshot {
        token: Some("tampered".to_owned()),
        user: None,
        is_authenticated: true,
    });
    assert!(SessionState::revalidate(&envelope).is_none());
}

#[test]
fn revalidate_without_token_yields_empty_session() {
    let envelope = Envelope::new(Snapshot::default());
    let state = SessionState::revalidate(&envelope).expect("empty session");
    assert_eq!(state, SessionState::default());
}

#[test]
fn revalidate_rederives_user_instead_of_trusting_snapshot() {
    // The stored snapshot claims admin, but the token says user.
    let envelope = Envelope::new(Snapshot {
        token: Some(token_for("carol", "user")),
        user: Some(User {
            username: "carol".to_owned(),
            role: Role::Admin,
        }),
        is_authenticated: true,
    });
    let state = SessionState::revalidate(&envelope).expect("session");
    assert_eq!(state.user.map(|u| u.role), Some(Role::User));
}
