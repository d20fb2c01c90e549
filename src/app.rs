//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::MainLayout;
use crate::components::protected::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage,
    login::LoginPage,
    orders::{CreateOrderPage, ManageProductsPage, OrderHistoryPage},
    products::ProductsPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the session from durable storage before the first render, then
/// provides it via context and sets up client-side routing. `/login` and
/// the catalog are public; everything under [`ProtectedRoute`] requires a
/// session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bakehouse-client.css"/>
        <Title text="Bakehouse"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=ProductsPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=(StaticSegment("orders"), StaticSegment("new")) view=CreateOrderPage/>
                        <Route path=StaticSegment("my-orders") view=OrderHistoryPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("products")) view=ManageProductsPage/>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
