//! Route guard for the protected application shell.
//!
//! DESIGN
//! ======
//! The guard is a three-state machine derived purely from the auth store:
//! `Checking` while the session is unresolved (neutral loading view, no
//! redirect, so a valid cookie never flashes through the login screen),
//! `Unauthenticated` once resolved without a user (redirect to `/login`),
//! `Authenticated` renders the subtree unchanged. A later session
//! invalidation flips the store and the guard transitions back out.
//!
//! The `dev-bypass-auth` cargo feature short-circuits the machine to
//! `Authenticated` at compile time; release builds never contain that path.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Resolution of the route guard for the current auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Derive the guard state from the auth store's lifecycle fields.
pub fn guard_state(loading: bool, authenticated: bool) -> GuardState {
    #[cfg(feature = "dev-bypass-auth")]
    {
        let _ = (loading, authenticated);
        GuardState::Authenticated
    }
    #[cfg(not(feature = "dev-bypass-auth"))]
    {
        if loading {
            GuardState::Checking
        } else if authenticated {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

/// Wrap a protected subtree. Triggers an idempotent session check on mount
/// and redirects to `/login` once the state resolves unauthenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::check_auth(auth).await;
    });

    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if guard_state(state.loading, state.authenticated) == GuardState::Unauthenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || {
        let state = auth.get();
        match guard_state(state.loading, state.authenticated) {
            GuardState::Checking => view! {
                <div class="guard guard--checking">
                    <p>"Checking session..."</p>
                </div>
            }
            .into_any(),
            GuardState::Unauthenticated => view! {
                <div class="guard guard--redirect">
                    <p>"Redirecting to login..."</p>
                </div>
            }
            .into_any(),
            GuardState::Authenticated => children().into_any(),
        }
    }
}
