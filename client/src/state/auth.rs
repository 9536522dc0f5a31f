//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The value is a projection of the
//! `auth::AuthSession` handle, refreshed from its change notifications.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{AuthStatus, Session};

/// Authentication state mirroring the current session.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    pub fn status(&self) -> AuthStatus {
        AuthStatus::of(&self.session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Label shown in headers: profile name, then email, then a fallback.
    pub fn display_name(&self) -> String {
        self.session
            .user
            .as_ref()
            .and_then(|user| user.display_name())
            .unwrap_or("signed in")
            .to_owned()
    }
}
