//! REST API helpers for the bakery backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the current
//! bearer token attached to every outgoing request. Server-side (SSR):
//! stubs returning errors, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so login and catalog
//! failures degrade to inline messages without crashing hydration.

#![allow(clippy::unused_async)]

use crate::net::types::Product;
#[cfg(feature = "hydrate")]
use crate::net::types::TokenResponse;

/// Build-time base URL for the bakery API; same-origin when unset.
#[cfg(feature = "hydrate")]
fn base_url() -> &'static str {
    option_env!("BAKEHOUSE_API_URL").unwrap_or("")
}

/// Attach `token` as a bearer credential when present; requests without a
/// token go out unmodified.
#[cfg(feature = "hydrate")]
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn get(path: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    with_bearer(
        gloo_net::http::Request::get(&format!("{}{path}", base_url())),
        token,
    )
}

#[cfg(feature = "hydrate")]
fn post(path: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    with_bearer(
        gloo_net::http::Request::post(&format!("{}{path}", base_url())),
        token,
    )
}

/// Exchange credentials for an access token via `POST /auth/token`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or a
/// response body without an `access_token`. Callers surface all of these as
/// one generic invalid-credentials message.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = format!(
            "username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        );
        let resp = post("/auth/token", None)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("token request failed: {}", resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the product catalog via `GET /products/`.
///
/// The list comes back in the server's order; no pagination or filtering
/// parameters are sent.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or an
/// unparseable body.
pub async fn fetch_products(token: Option<&str>) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get("/products/", token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("product fetch failed: {}", resp.status()));
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
