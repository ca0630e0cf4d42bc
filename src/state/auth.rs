//! Session/authorization state: the current user, the resolution
//! lifecycle, and the login/logout navigation side effects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// External identity provider. Login is a full-page redirect here with a
/// single `redirect` query parameter carrying the return URL.
pub const IDENTITY_PROVIDER_URL: &str = "https://auth.emergentagent.com/";

/// Unauthenticated landing view.
pub const ENTRY_PATH: &str = "/";

/// Return target after external authentication.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where the session check stands for this page lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Uninitialized,
    Resolving,
    Resolved,
}

/// Page-lifetime authentication state. Sole owner of the current user;
/// the user is replaced wholesale on login/logout, never partially
/// mutated.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: AuthPhase,
}

impl AuthState {
    /// True until the initial session check has settled.
    pub fn is_resolving(&self) -> bool {
        self.phase != AuthPhase::Resolved
    }

    /// The session check settled without a user.
    pub fn resolve_without_user(&mut self) {
        self.user = None;
        self.phase = AuthPhase::Resolved;
    }

    /// The session check settled with a user.
    pub fn resolve_with_user(&mut self, user: User) {
        self.user = Some(user);
        self.phase = AuthPhase::Resolved;
    }

    /// A just-completed token exchange produced this user.
    pub fn on_callback_success(&mut self, user: User) {
        self.user = Some(user);
        self.phase = AuthPhase::Resolved;
    }

    /// Synchronous local clear. Not guarded by the resolution flag, so a
    /// logout racing an unresolved who-am-I still ends with no user.
    pub fn clear(&mut self) {
        self.user = None;
        self.phase = AuthPhase::Resolved;
    }
}

/// Transient payload attached to a single navigation: the user produced
/// by a just-completed callback. Written once by the callback view,
/// consumed at most once by the route guard, never persisted.
#[derive(Clone, Debug, Default)]
pub struct NavHandoff {
    pub user: Option<User>,
}

impl NavHandoff {
    /// Consume the payload, leaving the handoff empty.
    pub fn take(&mut self) -> Option<User> {
        self.user.take()
    }
}

/// Whether the initial who-am-I call must be skipped for this fragment.
///
/// When the navigation target already carries an ephemeral token the
/// exchange has not happened yet; calling `/auth/me` now would race it
/// and incorrectly resolve to "no user". The callback view owns
/// resolution in that case.
pub fn should_defer_initial_check(fragment: &str) -> bool {
    crate::util::url::has_session_token(fragment)
}

/// Build the identity-provider login URL for the given origin.
///
/// The return target is derived strictly from the live origin; no
/// fallback URL is ever substituted.
pub fn login_url(origin: &str) -> String {
    let target = format!("{origin}{DASHBOARD_PATH}");
    match url::Url::parse_with_params(IDENTITY_PROVIDER_URL, [("redirect", target.as_str())]) {
        Ok(u) => u.into(),
        Err(_) => IDENTITY_PROVIDER_URL.to_owned(),
    }
}

/// Resolve the initial session state for this page load.
///
/// Runs exactly once from the composition root. Both `Unauthenticated`
/// and transport failures degrade to "no user", but the transport case is
/// logged so an unreachable backend is not silently mistaken for a
/// logged-out session.
pub fn init(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.phase = AuthPhase::Resolving);

        if should_defer_initial_check(&crate::util::url::current_fragment()) {
            auth.update(|a| a.phase = AuthPhase::Resolved);
            return;
        }

        leptos::task::spawn_local(async move {
            use crate::net::error::NetError;

            match crate::net::api::fetch_current_user().await {
                Ok(user) => auth.update(|a| a.resolve_with_user(user)),
                Err(NetError::Unauthenticated) => auth.update(AuthState::resolve_without_user),
                Err(e) => {
                    leptos::logging::warn!("session check failed: {e}");
                    auth.update(AuthState::resolve_without_user);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Leave the page for the identity provider. Not a state mutation.
pub fn login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            if let Ok(origin) = location.origin() {
                let _ = location.set_href(&login_url(&origin));
            }
        }
    }
}

/// Sign out: unconditional local clear first, then backend invalidation
/// whose outcome is ignored, then leave for the entry point. The user's
/// intent to sign out locally succeeds even if the server is unreachable.
pub fn logout(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        auth.update(AuthState::clear);
        leptos::task::spawn_local(async {
            // Let the invalidation request settle before the page unloads.
            crate::net::api::destroy_session().await;
            if let Some(location) = web_sys::window().map(|w| w.location()) {
                let _ = location.set_href(ENTRY_PATH);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
