//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` implements the guard's session source over the backend's
//! `auth/v1` HTTP surface and owns sign-in/sign-out.

pub mod session;
