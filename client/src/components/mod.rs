//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading shared session state from
//! Leptos context providers.

pub mod protected_route;
pub mod sidebar;
