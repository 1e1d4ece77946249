//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and calls into the session store; protected
//! pages rely on `ProtectedRoute` in `app` rather than checking auth themselves.

pub mod article;
pub mod articles;
pub mod author;
pub mod author_profile;
pub mod dashboard;
pub mod home;
pub mod join;
pub mod profile;
