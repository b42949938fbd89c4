//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the layout chrome coordinate login redirects and
//! identity-dependent rendering through this store. It is shared as an
//! `RwSignal<AuthState>` via Leptos context; all mutation goes through the
//! transition methods and orchestrators below, never direct field pokes from
//! components.
//!
//! DESIGN
//! ======
//! A subset of the state (`user`, `authenticated`) survives reloads in
//! localStorage. `loading`, `checking`, and `error` always reset to their
//! defaults on startup so a stale persisted snapshot can never wedge the
//! guard in a loading or error state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::types::User;

/// localStorage key for the persisted subset.
const STORAGE_KEY: &str = "modelarena-auth";

/// Cached session state: who is logged in, plus check lifecycle flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    /// True until the first session check resolves; the guard renders a
    /// neutral loading view instead of redirecting while this holds.
    pub loading: bool,
    /// True while a session check request is in flight. Distinct from
    /// `loading` so a second `check_auth` during the first cannot issue a
    /// duplicate request.
    pub checking: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
            checking: false,
            error: None,
        }
    }
}

/// The subset of [`AuthState`] that survives reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAuth {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl AuthState {
    /// Whether `check_auth` needs a network round-trip at all. Skips when a
    /// check is already in flight or the session has already resolved as
    /// authenticated.
    pub fn should_check(&self) -> bool {
        if self.checking {
            return false;
        }
        !(self.authenticated && !self.loading)
    }

    /// Mark a session check as started.
    pub fn begin_check(&mut self) {
        self.loading = true;
        self.checking = true;
        self.error = None;
    }

    /// Resolve a session check with the server's answer. `None` clears the
    /// session; either way the check lifecycle flags come down.
    pub fn resolve(&mut self, user: Option<User>) {
        self.authenticated = user.is_some();
        self.user = user;
        self.loading = false;
        self.checking = false;
    }

    /// Resolve a session check that failed outright. Clears the session and
    /// records the failure for diagnostics.
    pub fn fail(&mut self, message: String) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
        self.checking = false;
        self.error = Some(message);
    }

    /// Seed the session directly (after the external OAuth callback).
    pub fn set_user(&mut self, user: Option<User>) {
        self.authenticated = user.is_some();
        self.user = user;
        self.loading = false;
    }

    /// Reach the logged-out state unconditionally.
    pub fn clear(&mut self) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
        self.checking = false;
        self.error = None;
    }

    /// Snapshot of the persisted subset.
    pub fn persisted(&self) -> PersistedAuth {
        PersistedAuth {
            user: self.user.clone(),
            authenticated: self.authenticated,
        }
    }

    /// Rebuild startup state from a persisted snapshot. Lifecycle flags are
    /// not restored: the session still gets re-validated before the guard
    /// trusts it.
    pub fn restore(persisted: PersistedAuth) -> Self {
        Self {
            user: persisted.user,
            authenticated: persisted.authenticated,
            ..Self::default()
        }
    }
}

/// Build the startup auth state, reading the persisted subset when available.
pub fn init_auth() -> AuthState {
    load_persisted().map(AuthState::restore).unwrap_or_default()
}

/// Decode a stored snapshot. A corrupt or outdated snapshot yields `None`,
/// which falls back to the logged-out default.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn decode_persisted(raw: &str) -> Option<PersistedAuth> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedAuth> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode_persisted(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the persisted subset under [`STORAGE_KEY`]. SSR and native builds
/// no-op so server rendering stays deterministic.
fn persist(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(&auth.get_untracked().persisted()) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Validate the session cookie against `GET /auth/me` and settle the store.
///
/// Short-circuits without a network call when a check is already in flight or
/// the session has already resolved as authenticated.
pub async fn check_auth(auth: RwSignal<AuthState>) {
    if !auth.get_untracked().should_check() {
        return;
    }
    auth.update(AuthState::begin_check);
    match api::fetch_me().await {
        Ok(user) => auth.update(|a| a.resolve(Some(user))),
        Err(err) => {
            leptos::logging::warn!("session check failed: {err}");
            auth.update(|a| a.fail(err.to_string()));
        }
    }
    persist(auth);
}

/// Best-effort server logout followed by an unconditional local clear. The
/// user's intent to leave always succeeds locally, network or not.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    auth.update(AuthState::clear);
    persist(auth);
}

/// Seed the store with a known user (post-callback) and persist the subset.
pub fn set_user(auth: RwSignal<AuthState>, user: Option<User>) {
    auth.update(|a| a.set_user(user));
    persist(auth);
}

/// Hand the browser off to the external authorization endpoint. The OAuth
/// handshake itself is entirely server-side.
pub fn login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&api::google_login_url());
        }
    }
}
