//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser glue (timers, dialogs, fetch scheduling)
//! from page and component logic so the rest stays testable natively.

pub mod basic_auth;
pub mod confirm;
pub mod notify;
pub mod refresh;
