//! Auth session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthSession`] exclusively owns the in-memory [`Session`]. Successful
//! mutations are mirrored into [`SessionStorage`] and announced to subscribers;
//! redirects go through the injected [`Navigator`] rather than a page reload.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`register`/`refresh_profile` report failures as [`AuthError`] and
//! leave state untouched. `logout` and `restore_from_storage` never fail: a
//! corrupt stored user is logged, both keys are cleared, and the session is
//! reset to empty.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. Nothing serializes overlapping `login`/`register` calls;
//! the response that resolves last decides the final state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{Value, json};

use crate::error::AuthError;
use crate::guard::{HOME_PATH, LOGIN_PATH};
use crate::http::ApiClient;
use crate::state::{Session, UserProfile};
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

const LOGIN_ENDPOINT: &str = "/api/login";
const REGISTER_ENDPOINT: &str = "/api/register";
const PROFILE_ENDPOINT: &str = "/api/user/profile";

/// Applies in-app redirects requested by the session manager.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// What changed in the most recent session mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    Restored,
    SignedOut,
    ProfileUpdated,
}

/// Result of a successful registration call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The server returned a session; the user is now signed in.
    SignedIn,
    /// The account was created but no session was issued.
    Registered { message: Option<String> },
}

/// Handle returned by [`AuthSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(SessionEvent, &Session)>;

#[derive(Default)]
struct Shared {
    session: RefCell<Session>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
}

/// Stored user that cannot be parsed. Never leaves this module.
#[derive(Debug, thiserror::Error)]
#[error("stored user is not valid JSON: {0}")]
struct StorageCorruption(#[from] serde_json::Error);

/// Token + user pair as found in an API response.
enum Credentials {
    Complete { token: String, user: UserProfile },
    Partial,
    Absent,
}

impl Credentials {
    fn from_response(response: &Value) -> Self {
        let token = response
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty());
        let user = response.get("user").filter(|user| !user.is_null());
        match (token, user) {
            (Some(token), Some(user)) => Self::Complete {
                token: token.to_owned(),
                user: UserProfile::new(user.clone()),
            },
            (None, None) => Self::Absent,
            _ => Self::Partial,
        }
    }
}

/// Bare profile body: an object carrying `id` or `email`.
fn looks_like_profile(body: &Value) -> bool {
    body.get("id").is_some_and(|id| !id.is_null())
        || body.get("email").is_some_and(|email| !email.is_null())
}

/// Cloneable handle to the shared session state.
#[derive(Clone)]
pub struct AuthSession {
    shared: Rc<Shared>,
    storage: Rc<dyn SessionStorage>,
    api: ApiClient,
    navigator: Rc<dyn Navigator>,
}

impl AuthSession {
    /// Create an empty session. Call [`AuthSession::restore_from_storage`] to
    /// pick up a persisted one.
    pub fn new(
        storage: impl SessionStorage + 'static,
        api: ApiClient,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared::default()),
            storage: Rc::new(storage),
            api,
            navigator: Rc::new(navigator),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.shared.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.shared.session.borrow().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.shared.session.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.shared.session.borrow().is_authenticated()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Register a listener called after every session mutation.
    pub fn subscribe(&self, listener: impl Fn(SessionEvent, &Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.shared.next_listener.get());
        self.shared.next_listener.set(id.0 + 1);
        self.shared.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.shared.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Sign in with email and password, then navigate home.
    ///
    /// # Errors
    ///
    /// [`AuthError::Authentication`] when the request fails and
    /// [`AuthError::InvalidServerResponse`] when the reply lacks a token or user.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let body = json!({ "email": email, "password": password });
        let response = self
            .api
            .post_json(LOGIN_ENDPOINT, body, None)
            .await
            .map_err(|e| {
                log::warn!("login failed: {e}");
                AuthError::Authentication(e.to_string())
            })?;

        match Credentials::from_response(&response) {
            Credentials::Complete { token, user } => {
                self.sign_in(token, user);
                Ok(())
            }
            Credentials::Partial | Credentials::Absent => {
                log::warn!("login response missing token or user");
                Err(AuthError::InvalidServerResponse)
            }
        }
    }

    /// Create an account. Signs in and navigates home when the server also
    /// issues a session.
    ///
    /// # Errors
    ///
    /// [`AuthError::Registration`] when the request fails and
    /// [`AuthError::InvalidServerResponse`] when only one of token/user is present.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        let body = json!({ "email": email, "password": password, "name": name });
        let response = self
            .api
            .post_json(REGISTER_ENDPOINT, body, None)
            .await
            .map_err(|e| {
                log::warn!("registration failed: {e}");
                AuthError::Registration(e.to_string())
            })?;

        match Credentials::from_response(&response) {
            Credentials::Complete { token, user } => {
                self.sign_in(token, user);
                Ok(RegisterOutcome::SignedIn)
            }
            Credentials::Absent => {
                let message = response
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned);
                Ok(RegisterOutcome::Registered { message })
            }
            Credentials::Partial => {
                log::warn!("register response carried only one of token/user");
                Err(AuthError::InvalidServerResponse)
            }
        }
    }

    /// Clear the session and storage, then navigate to `/login`.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.replace(Session::default(), SessionEvent::SignedOut);
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Reload the session from storage.
    ///
    /// A stored token replaces the in-memory one; a missing token leaves it as
    /// is. The user is parsed from storage, with missing, `"undefined"` and
    /// `"null"` values meaning no user. Unparseable user data clears both keys
    /// and empties the session.
    pub fn restore_from_storage(&self) {
        let current = self.snapshot();
        let restored = match self.read_stored(&current) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("discarding stored session: {e}");
                self.storage.remove(USER_KEY);
                self.storage.remove(TOKEN_KEY);
                Session::default()
            }
        };
        if restored != current {
            self.replace(restored, SessionEvent::Restored);
        }
    }

    /// Re-fetch the signed-in user's profile with the bearer token.
    ///
    /// An HTTP 401 means the token is no longer accepted: the session is
    /// cleared as by [`AuthSession::logout`]. A reply that arrives after the
    /// session moved on to another token (or none) is discarded.
    ///
    /// # Errors
    ///
    /// [`AuthError::Profile`] when not signed in, the request fails, the reply
    /// holds no profile, or the session changed while the request was pending.
    pub async fn refresh_profile(&self) -> Result<UserProfile, AuthError> {
        let Some(token) = self.token() else {
            return Err(AuthError::Profile("not signed in".to_owned()));
        };

        let result = self.api.get_json(PROFILE_ENDPOINT, Some(&token)).await;
        if self.token().as_deref() != Some(token.as_str()) {
            log::debug!("dropping profile reply for a replaced session");
            return Err(AuthError::Profile("session changed".to_owned()));
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::warn!("profile refresh failed: {e}");
                if e.status() == Some(401) {
                    self.logout();
                }
                return Err(AuthError::Profile(e.to_string()));
            }
        };

        let nested = response.get("user").filter(|user| !user.is_null()).cloned();
        let user = match nested {
            Some(user) => UserProfile::new(user),
            None if looks_like_profile(&response) => UserProfile::new(response),
            None => {
                log::warn!("profile reply carried no user");
                return Err(AuthError::Profile("unexpected profile response".to_owned()));
            }
        };

        self.storage.set(USER_KEY, &user.to_json());
        let mut next = self.snapshot();
        next.user = Some(user.clone());
        self.replace(next, SessionEvent::ProfileUpdated);
        Ok(user)
    }

    fn sign_in(&self, token: String, user: UserProfile) {
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(USER_KEY, &user.to_json());
        self.replace(Session::signed_in(token, user), SessionEvent::SignedIn);
        self.navigator.navigate(HOME_PATH);
    }

    fn read_stored(&self, current: &Session) -> Result<Session, StorageCorruption> {
        let token = self
            .storage
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .or_else(|| current.token.clone());

        let user = match self.storage.get(USER_KEY) {
            Some(raw) if !raw.is_empty() && raw != "undefined" && raw != "null" => {
                Some(UserProfile::from_json(&raw)?)
            }
            _ => None,
        };

        Ok(Session { token, user })
    }

    fn replace(&self, next: Session, event: SessionEvent) {
        *self.shared.session.borrow_mut() = next.clone();
        log::debug!("session {event:?}, authenticated={}", next.is_authenticated());
        // Listeners may call back into the session, so no borrow is held here.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event, &next);
        }
    }
}
