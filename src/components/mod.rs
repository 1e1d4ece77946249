//! Reusable UI components shared across pages.

pub mod article_card;
pub mod footer;
pub mod navbar;
