//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` holds route-protection rules and `analytics` the event sink, so
//! pages and the session store share one implementation of each.

pub mod analytics;
pub mod guard;
