//! Top navigation bar with auth-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Navigation bar: brand link, catalog link, and either a login button or
/// the dashboard link, a greeting, and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session.update(SessionState::logout);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Bakehouse"</a>
            <div class="navbar__links">
                <a href="/products">"Products"</a>
                <Show
                    when=move || session.get().is_authenticated
                    fallback=|| view! { <a class="btn btn--primary" href="/login">"Login"</a> }
                >
                    <a href="/dashboard">"Dashboard"</a>
                    <span class="navbar__greeting">
                        {move || session.get().user.map(|u| format!("Hello, {}", u.username))}
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
