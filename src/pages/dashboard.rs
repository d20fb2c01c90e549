//! Staff dashboard with links into order management.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Dashboard page — greets the signed-in user and links to the order
/// workflows. The product-management card only renders for admins; that
/// check lives here, not in the route guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || session.get().user.map(|u| u.username).unwrap_or_default();
    let is_admin = move || session.get().user.is_some_and(|u| u.role == Role::Admin);

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p class="dashboard-page__welcome">
                "Welcome back, " <span class="dashboard-page__name">{username}</span> "!"
            </p>

            <div class="dashboard-page__cards">
                <a class="dashboard-card" href="/orders/new">
                    <h2>"New Order"</h2>
                    <p>"Create a new order for a customer."</p>
                </a>
                <a class="dashboard-card" href="/my-orders">
                    <h2>"Order History"</h2>
                    <p>"Review every order placed in the system."</p>
                </a>
                <Show when=is_admin>
                    <a class="dashboard-card dashboard-card--admin" href="/admin/products">
                        <h2>"Manage Products"</h2>
                        <p>"Administrator access to add and edit catalog items."</p>
                    </a>
                </Show>
            </div>
        </div>
    }
}
