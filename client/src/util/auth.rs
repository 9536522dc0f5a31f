//! Shared auth wiring for the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthSession` is created at app start and provided through context.
//! Its change notifications feed the reactive `AuthState` signal, and its
//! redirect requests land in a pending-redirect signal that the router turns
//! into in-app navigation. Every route change runs the navigation guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{ApiClient, AuthSession, GuardDecision, NavigationGuard, Navigator};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Navigator that parks the destination in a signal for the router to apply.
#[derive(Clone, Copy, Debug)]
pub struct PendingRedirect(pub RwSignal<Option<String>>);

impl Navigator for PendingRedirect {
    fn navigate(&self, path: &str) {
        self.0.set(Some(path.to_owned()));
    }
}

/// Everything pages need to read or drive the session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<AuthSession, LocalStorage>,
    pub state: RwSignal<AuthState>,
    pub redirect: PendingRedirect,
}

impl AuthContext {
    /// Cheap clone of the shared session handle.
    pub fn session(&self) -> AuthSession {
        self.session.get_value()
    }
}

/// Whether the signed-out fallback should send the user to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Build the session, restore it, and provide [`AuthContext`].
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let state = RwSignal::new(AuthState::default());
    let redirect = PendingRedirect(RwSignal::new(None));

    let session = AuthSession::new(BrowserStorage, api, redirect);
    session.subscribe(move |_, snapshot| {
        let snapshot = snapshot.clone();
        state.update(|s| s.session = snapshot);
    });
    session.restore_from_storage();
    state.set(AuthState {
        session: session.snapshot(),
    });

    let ctx = AuthContext {
        session: StoredValue::new_local(session),
        state,
        redirect,
    };
    provide_context(ctx);
    ctx
}

/// Run the navigation guard on every location change.
///
/// Must be called under a `<Router>`.
pub fn install_route_guard<F>(ctx: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let guard = NavigationGuard::new(ctx.session());
        if let GuardDecision::Redirect(to) = guard.check(&path) {
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

/// Apply redirects requested by the session (after login, logout, expiry).
pub fn install_session_redirects<F>(redirect: PendingRedirect, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = redirect.0.get() {
            redirect.0.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
