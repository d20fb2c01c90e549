use super::*;
use base64::Engine as _;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    format!("{header}.{}.signature", URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decodes_subject_and_role() {
    let user = decode(&token_with_payload(r#"{"sub":"alice","role":"user"}"#)).expect("user");
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::User);
}

#[test]
fn decodes_admin_role() {
    let user = decode(&token_with_payload(r#"{"sub":"root","role":"admin"}"#)).expect("user");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn ignores_extra_claims() {
    let payload = r#"{"sub":"alice","role":"user","exp":1999999999,"iat":1700000000}"#;
    let user = decode(&token_with_payload(payload)).expect("user");
    assert_eq!(user.username, "alice");
}

// =============================================================
// Malformed tokens
// =============================================================

#[test]
fn rejects_wrong_segment_count() {
    assert!(decode("").is_none());
    assert!(decode("onlyonesegment").is_none());
    assert!(decode("two.segments").is_none());
    assert!(decode("a.b.c.d").is_none());
}

#[test]
fn rejects_invalid_base64_payload() {
    assert!(decode("header.!!not-base64!!.signature").is_none());
}

#[test]
fn rejects_non_json_payload() {
    assert!(decode(&token_with_payload("plain text, not json")).is_none());
}

#[test]
fn rejects_missing_claims() {
    assert!(decode(&token_with_payload(r#"{"sub":"alice"}"#)).is_none());
    assert!(decode(&token_with_payload(r#"{"role":"user"}"#)).is_none());
    assert!(decode(&token_with_payload("{}")).is_none());
}

#[test]
fn rejects_unknown_role() {
    assert!(decode(&token_with_payload(r#"{"sub":"alice","role":"superuser"}"#)).is_none());
}
