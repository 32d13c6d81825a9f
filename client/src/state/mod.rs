//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`activities`, `session`, `message`) and each is
//! provided as an `RwSignal` through Leptos context so components depend only
//! on the slice they render.

pub mod activities;
pub mod message;
pub mod session;
