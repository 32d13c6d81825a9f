//! Decision helpers for the board page's user actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page and its components own the async glue; these functions decide
//! what each API result means for the UI (message, refresh, form reset) so
//! that policy is testable without a browser.

#![cfg_attr(not(feature = "hydrate"), allow(dead_code))]

#[cfg(test)]
#[path = "activities_actions_test.rs"]
mod activities_actions_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageKind, MessageState};
use crate::state::session::SessionState;
use crate::util::notify::flash;
use crate::util::refresh::refresh_activities;

const GENERIC_ERROR: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
const UNREGISTER_FORBIDDEN: &str = "Only authenticated teachers can unregister students.";
const LOGIN_REJECTED: &str = "Teacher authentication failed.";
const LOGIN_FAILED: &str = "Failed to verify teacher credentials.";
const LOGIN_OK: &str = "Teacher authenticated.";
const LOGOUT_OK: &str = "Teacher mode turned off.";

/// What the UI should do after an action settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub kind: MessageKind,
    pub text: String,
    pub refresh: bool,
    pub reset_form: bool,
}

impl Outcome {
    fn success(text: String) -> Self {
        Self { kind: MessageKind::Success, text, refresh: true, reset_form: false }
    }

    fn error(text: String) -> Self {
        Self { kind: MessageKind::Error, text, refresh: false, reset_form: false }
    }
}

/// Whether an unregister click may proceed to the confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum UnregisterGate {
    /// No teacher session; show the outcome and issue no request.
    Denied(Outcome),
    /// Ask the user `prompt`, then call the API with `authorization`.
    Confirm { prompt: String, authorization: String },
}

pub(crate) fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Confirm unregister {email} from {activity}? This action cannot be undone.")
}

pub(crate) fn gate_unregister(session: &SessionState, activity: &str, email: &str) -> UnregisterGate {
    match session.authorization() {
        Some(authorization) => UnregisterGate::Confirm {
            prompt: unregister_prompt(activity, email),
            authorization: authorization.to_owned(),
        },
        None => UnregisterGate::Denied(Outcome::error(UNREGISTER_FORBIDDEN.to_owned())),
    }
}

pub(crate) fn signup_outcome(result: Result<Option<String>, ApiError>) -> Outcome {
    match result {
        Ok(message) => Outcome {
            reset_form: true,
            ..Outcome::success(message.unwrap_or_else(|| "Signed up.".to_owned()))
        },
        Err(e) => Outcome::error(e.user_message(GENERIC_ERROR, SIGNUP_FAILED)),
    }
}

pub(crate) fn unregister_outcome(result: Result<Option<String>, ApiError>) -> Outcome {
    match result {
        Ok(message) => Outcome::success(message.unwrap_or_else(|| "Unregistered.".to_owned())),
        Err(e) => Outcome::error(e.user_message(GENERIC_ERROR, UNREGISTER_FAILED)),
    }
}

pub(crate) fn login_outcome(result: &Result<Option<String>, ApiError>) -> Outcome {
    match result {
        Ok(message) => Outcome::success(message.clone().unwrap_or_else(|| LOGIN_OK.to_owned())),
        Err(e) => Outcome::error(e.user_message(LOGIN_REJECTED, LOGIN_FAILED)),
    }
}

pub(crate) fn logout_outcome() -> Outcome {
    Outcome { kind: MessageKind::Info, ..Outcome::success(LOGOUT_OK.to_owned()) }
}

/// Log failures that never reached the backend's error handling.
#[cfg(feature = "hydrate")]
pub(crate) fn log_fault(action: &str, result: &Result<Option<String>, ApiError>) {
    if let Err(e) = result {
        if !matches!(e, ApiError::Rejected { .. }) {
            log::error!("Error {action}: {e}");
        }
    }
}

/// Show the outcome's message and refresh the list if it asks for one.
pub(crate) fn apply(outcome: Outcome, messages: RwSignal<MessageState>, activities: RwSignal<ActivitiesState>) {
    flash(messages, outcome.kind, outcome.text);
    if outcome.refresh {
        refresh_activities(activities);
    }
}

/// Settle a teacher verification: move the session to LoggedIn or LoggedOut,
/// then show the outcome. A success refreshes the list exactly once.
pub(crate) fn finish_login(
    session: RwSignal<SessionState>,
    messages: RwSignal<MessageState>,
    activities: RwSignal<ActivitiesState>,
    username: String,
    authorization: String,
    result: &Result<Option<String>, ApiError>,
) {
    let outcome = login_outcome(result);
    if result.is_ok() {
        session.update(|s| s.login_succeeded(username, authorization));
    } else {
        session.update(SessionState::login_failed);
    }
    apply(outcome, messages, activities);
}
