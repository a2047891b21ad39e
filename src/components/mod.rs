//! Reusable UI components.

pub mod navbar;
pub mod project_card;
