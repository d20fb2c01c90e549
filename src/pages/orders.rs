//! Order-management pages. Placeholders until the ordering workflow lands.

use leptos::prelude::*;

/// Placeholder for the order-creation flow.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1>"New Order"</h1>
            <p>"Order creation is not available yet."</p>
        </div>
    }
}

/// Placeholder for the order history listing.
#[component]
pub fn OrderHistoryPage() -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1>"Order History"</h1>
            <p>"Order history is not available yet."</p>
        </div>
    }
}

/// Placeholder for the admin catalog editor.
#[component]
pub fn ManageProductsPage() -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1>"Manage Products"</h1>
            <p>"Catalog management is not available yet."</p>
        </div>
    }
}
