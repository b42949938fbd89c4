//! Login page with the Google OAuth redirect button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::{GuardState, guard_state};
use crate::state::auth::AuthState;

/// Login page — signing in is a full-page handoff to the external
/// authorization endpoint; the client performs no OAuth handshake itself.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already-authenticated sessions skip straight to the dashboard.
    Effect::new(move || {
        let state = auth.get();
        if guard_state(state.loading, state.authenticated) == GuardState::Authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_login = move |_| crate::state::auth::login();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Modelarena"</h1>
                <p class="login-card__subtitle">
                    "Manage LLM endpoints, prompt templates, and comparative test runs"
                </p>
                <button class="login-button" on:click=on_login>
                    "Sign in with Google"
                </button>
            </div>
        </div>
    }
}
