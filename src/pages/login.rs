//! Login page: posts credentials to the token endpoint and stores the
//! resulting access token in the session.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Shown whenever the login request fails, regardless of cause.
const LOGIN_FAILED: &str = "Invalid username or password. Please try again.";

/// Login form with inline error reporting and a loading state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Demo credentials pre-filled for convenience.
    let username = RwSignal::new("admin".to_owned());
    let password = RwSignal::new("adminpassword".to_owned());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let user = username.get_untracked();
                let pass = password.get_untracked();
                match crate::net::api::login(&user, &pass).await {
                    Ok(token) => {
                        session.update(|s| s.login(token));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(LOGIN_FAILED.to_owned());
                    }
                }
                loading.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Bakehouse"</h1>
                <p>"Storefront sign in"</p>
                <form on:submit=on_submit>
                    <label class="login-page__label">
                        "Username"
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-page__label">
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-page__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
