//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Each model is provided as an `RwSignal` context by the root `App`.

pub mod auth;
