//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the session core's transport seam and builds the
//! one API client the app shares.

pub mod api;
