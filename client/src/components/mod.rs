//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board's sections while reading/writing shared state
//! from Leptos context providers.

pub mod activity_card;
pub mod activity_list;
pub mod signup_form;
pub mod status_message;
pub mod teacher_panel;
