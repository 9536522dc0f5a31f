//! Client-side authentication session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate owns the session model shared by the browser `client` and the
//! native `cli`. It keeps a token + user pair in memory, mirrors it into a
//! persistent key/value store, talks to the remote login/register endpoints
//! through a pluggable [`Transport`], and decides whether a navigation may
//! proceed.
//!
//! Front ends plug in three seams:
//! - [`SessionStorage`] for durable key/value persistence,
//! - [`Transport`] for the HTTP round trip,
//! - [`Navigator`] for applying redirects.

pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod session;
pub mod state;
pub mod storage;

#[cfg(test)]
mod testing;

pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::{AuthError, TransportError};
pub use guard::{AuthStatus, GuardDecision, NavigationGuard, PUBLIC_PATHS};
pub use http::{ApiClient, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use session::{AuthSession, Navigator, RegisterOutcome, SessionEvent, SubscriptionId};
pub use state::{Session, UserProfile};
pub use storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};
