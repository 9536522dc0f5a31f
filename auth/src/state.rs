//! In-memory session model.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is the pair every other module reasons about: the guard checks
//! its token, the client renders its user, and the store mirrors both fields.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User record returned by the remote API.
///
/// The layer treats it as opaque JSON. The accessors below only read the
/// backend's usual fields for display and never drive authorization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a stored JSON string.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `raw` is not valid JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }

    /// Compact JSON form written to persistent storage.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// `id` field as text; numeric ids are rendered in decimal.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Name when set and non-empty, else email.
    pub fn display_name(&self) -> Option<&str> {
        self.name().filter(|name| !name.is_empty()).or_else(|| self.email())
    }
}

impl From<Value> for UserProfile {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Current authenticated identity.
///
/// `token` and `user` are normally set and cleared together. A restore from
/// storage may leave a token without a user when the stored user is missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn signed_in(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Token presence is the sole authorization signal.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}
