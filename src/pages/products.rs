//! Public product catalog page.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::session::SessionState;

/// Shown when the catalog cannot be loaded; there is no retry.
const FETCH_FAILED: &str = "Could not load the product catalog.";

/// Catalog page — fetches the product list on mount and renders it as a
/// card grid. Visible with or without a session; the bearer token rides
/// along when present.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let products = LocalResource::new(move || {
        let token = session.get().token;
        async move { crate::net::api::fetch_products(token.as_deref()).await }
    });

    view! {
        <div class="products-page">
            <h1>"Product Catalog"</h1>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="products-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|p| view! { <ProductCard product=p/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                log::warn!("product fetch failed: {e}");
                                view! { <p class="products-page__error">{FETCH_FAILED}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One catalog entry: name, section, and price per unit.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <h2 class="product-card__name">{product.product_name}</h2>
            <p class="product-card__section">{format!("Section: {}", product.section)}</p>
            <p class="product-card__price">
                {format!("${:.2}", product.price)}
                <span class="product-card__unit">{format!(" / {}", product.unit)}</span>
            </p>
        </div>
    }
}
