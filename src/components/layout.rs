//! Shared page chrome: navbar above the routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;

/// Layout route wrapping every page except login.
#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
