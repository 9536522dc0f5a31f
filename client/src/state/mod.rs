//! Reactive client state.

pub mod auth;
