//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read `AuthContext` and call the session handle; access control lives
//! in the router-level guard, not in individual pages.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
