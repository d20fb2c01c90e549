//! Route guard for the authenticated subtree.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Decision made for a protected view at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
}

/// Gate a protected view on the current authentication flag.
///
/// Roles are not consulted here; role gating is a per-page render decision.
pub fn check(is_authenticated: bool) -> GuardOutcome {
    if is_authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Layout route wrapping everything that requires a signed-in user.
///
/// Unauthenticated visitors are sent to `/login`, replacing the current
/// history entry so Back does not return to the protected view. Nothing
/// from the protected subtree is rendered while unauthenticated.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if check(session.get().is_authenticated) == GuardOutcome::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || check(session.get().is_authenticated) == GuardOutcome::Allow>
            <Outlet/>
        </Show>
    }
}
