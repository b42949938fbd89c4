//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::layout::MainLayout;
use crate::pages::{
    auth_callback::AuthCallbackPage, dashboard::DashboardPage, history::HistoryPage,
    login::LoginPage, models::ModelsPage, prompts::PromptsPage, test::TestPage,
};
use crate::state::auth;

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
/// Provides the auth store context and sets up client-side routing. The
/// store is seeded from persisted storage so a reload shows the last known
/// identity while the session check resolves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_store = RwSignal::new(auth::init_auth());
    provide_context(auth_store);

    view! {
        <Stylesheet id="leptos" href="/pkg/modelarena.css"/>
        <Title text="Modelarena"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=AuthCallbackPage
                />
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("models") view=ModelsPage/>
                    <Route path=StaticSegment("prompts") view=PromptsPage/>
                    <Route path=StaticSegment("test") view=TestPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded chrome around every authenticated route.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout>
                <Outlet/>
            </MainLayout>
        </RequireAuth>
    }
}
