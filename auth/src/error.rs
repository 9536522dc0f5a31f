//! Error types surfaced by session operations.
//!
//! ERROR HANDLING
//! ==============
//! Only `login`, `register` and `refresh_profile` return errors. `logout` and
//! `restore_from_storage` absorb every failure and degrade to an empty session,
//! so storage corruption never appears here.

/// Failure of a user-initiated auth operation.
///
/// The `Display` output is the human-readable message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A successful-looking response did not carry a complete token + user pair.
    #[error("invalid server response")]
    InvalidServerResponse,
    /// The login request failed; wraps the underlying cause.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// The register request failed; wraps the underlying cause.
    #[error("registration failed: {0}")]
    Registration(String),
    /// Fetching the current user's profile failed.
    #[error("profile request failed: {0}")]
    Profile(String),
}

/// Failure of a single HTTP round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
