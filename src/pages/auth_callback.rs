//! Post-OAuth callback landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authorization server redirects here after setting the session cookie.
//! The page validates that cookie once and then hands off to the dashboard;
//! it renders nothing but a transitional message.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Auth callback page — validates the fresh session, then navigates home.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<AuthState>>();
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            crate::state::auth::check_auth(auth).await;
            navigate("/", NavigateOptions::default());
        });
    }

    view! {
        <div class="callback-page">
            <p>"Completing sign-in..."</p>
        </div>
    }
}
