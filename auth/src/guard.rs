//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every client-side route change. It re-reads the persisted
//! session, then lets the navigation through when a token is present or the
//! destination is public. Everything else is sent to `/login`.
//!
//! There are no roles or permissions at this layer: token presence is the only
//! authorization signal.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::AuthSession;
use crate::state::Session;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Destinations reachable without a token.
pub const PUBLIC_PATHS: [&str; 3] = [HOME_PATH, LOGIN_PATH, REGISTER_PATH];

/// Two-state view of the session, derived from token presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

impl AuthStatus {
    pub fn of(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Path component of a navigation target, without `?query` or `#fragment`.
pub fn route_path(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

pub fn is_public_path(target: &str) -> bool {
    PUBLIC_PATHS.contains(&route_path(target))
}

/// Pure guard policy.
pub fn decide(status: AuthStatus, target: &str) -> GuardDecision {
    if status == AuthStatus::Authenticated || is_public_path(target) {
        GuardDecision::Proceed
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Guard bound to a session handle.
#[derive(Clone)]
pub struct NavigationGuard {
    session: AuthSession,
}

impl NavigationGuard {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    /// Restore from storage, then decide whether `target` may be entered.
    pub fn check(&self, target: &str) -> GuardDecision {
        self.session.restore_from_storage();
        let decision = decide(self.status(), target);
        if let GuardDecision::Redirect(to) = decision {
            log::debug!("guard: {} -> {to}", route_path(target));
        }
        decision
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus::of(&self.session.snapshot())
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }
}
