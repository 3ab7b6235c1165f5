//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and route gating while reading/writing
//! shared state from Leptos context providers.

pub mod nav_bar;
pub mod route_guard;
