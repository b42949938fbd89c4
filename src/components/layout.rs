//! Navigation shell around the protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the sidebar navigation and the identity/logout header; page
//! content is slotted into `<main>`. Lives inside the route guard, so it can
//! assume a resolved session.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Application chrome: sidebar, header with the signed-in user, page slot.
#[component]
pub fn MainLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(|| "Account".to_owned(), |user| user.name)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(auth).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <span class="shell__brand">"Modelarena"</span>
                <nav class="shell__nav">
                    <a class="shell__nav-link" href="/">"Dashboard"</a>
                    <a class="shell__nav-link" href="/models">"Models"</a>
                    <a class="shell__nav-link" href="/prompts">"Prompts"</a>
                    <a class="shell__nav-link" href="/test">"Run Test"</a>
                    <a class="shell__nav-link" href="/history">"History"</a>
                </nav>
            </aside>
            <div class="shell__body">
                <header class="shell__header">
                    <span class="shell__spacer"></span>
                    <span class="shell__user">{user_name}</span>
                    <button class="btn shell__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="shell__main">{children()}</main>
            </div>
        </div>
    }
}
