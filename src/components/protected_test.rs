use super::*;

// =============================================================
// Guard decision
// =============================================================

#[test]
fn unauthenticated_viewers_are_redirected() {
    assert_eq!(check(false), GuardOutcome::RedirectToLogin);
}

#[test]
fn authenticated_viewers_are_allowed() {
    assert_eq!(check(true), GuardOutcome::Allow);
}
