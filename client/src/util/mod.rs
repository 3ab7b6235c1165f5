//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers) from page and
//! guard logic so the latter stay testable off-browser.

pub mod storage;
pub mod timer;
