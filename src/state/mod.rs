//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state and its operations; `storage` is the
//! persistence seam it writes through to.

pub mod session;
pub mod storage;
