//! API base URL configuration.
//!
//! DESIGN
//! ======
//! Every HTTP call in the workspace derives its URL from one [`ApiConfig`], so
//! the login/register endpoints and any other API request can never point at
//! different hosts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Resolved API location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self { base_url: trimmed.to_owned() }
    }

    /// Use `value` when it is present and non-blank, else the default base.
    pub fn from_optional(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::new(raw),
            _ => Self::default(),
        }
    }

    /// Read `API_BASE` as captured at compile time.
    ///
    /// WASM builds have no process environment, so the browser client bakes the
    /// value in when the bundle is built.
    pub fn from_build_env() -> Self {
        Self::from_optional(option_env!("API_BASE"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL, inserting a `/` when `path` lacks one.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
