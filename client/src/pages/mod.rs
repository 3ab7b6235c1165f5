//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per route in the guard's route table. Pages assume the guard has
//! already run; protected pages read the signed-in user from `AuthState`.

pub mod board;
pub mod contact;
pub mod home;
pub mod login;
pub mod profile;
pub mod stats;
