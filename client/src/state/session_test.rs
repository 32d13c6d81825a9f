use super::*;

fn logged_in() -> SessionState {
    let mut state = SessionState::default();
    state.username_input = "mrodriguez".to_owned();
    state.password_input = "art123".to_owned();
    state.login_succeeded("mrodriguez".to_owned(), "Basic bXJvZHJpZ3VlejphcnQxMjM=".to_owned());
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_logged_out() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.authorization().is_none());
    assert!(!state.verifying);
}

#[test]
fn session_phase_default_is_logged_out() {
    assert_eq!(SessionPhase::default(), SessionPhase::LoggedOut);
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_trims_username_but_not_password() {
    let state = SessionState {
        username_input: "  teacher  ".to_owned(),
        password_input: " secret ".to_owned(),
        ..SessionState::default()
    };
    assert_eq!(state.credentials(), Ok(("teacher".to_owned(), " secret ".to_owned())));
}

#[test]
fn credentials_requires_both_fields() {
    let blank_user = SessionState {
        username_input: "   ".to_owned(),
        password_input: "secret".to_owned(),
        ..SessionState::default()
    };
    assert_eq!(blank_user.credentials(), Err(MISSING_CREDENTIALS));

    let blank_pass = SessionState { username_input: "teacher".to_owned(), ..SessionState::default() };
    assert_eq!(blank_pass.credentials(), Err(MISSING_CREDENTIALS));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_succeeded_enters_logged_in_and_clears_password() {
    let state = logged_in();
    assert!(state.is_logged_in());
    assert_eq!(state.authorization(), Some("Basic bXJvZHJpZ3VlejphcnQxMjM="));
    assert_eq!(state.username_input, "mrodriguez");
    assert!(state.password_input.is_empty());
}

#[test]
fn login_failed_returns_to_logged_out() {
    let mut state = logged_in();
    state.verifying = true;
    state.login_failed();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.authorization().is_none());
    assert!(!state.verifying);
}

#[test]
fn logout_clears_token_and_both_fields_when_logged_in() {
    let mut state = logged_in();
    state.username_input = "mrodriguez".to_owned();
    state.password_input = "typed-again".to_owned();
    state.logout();
    assert!(state.authorization().is_none());
    assert!(state.username_input.is_empty());
    assert!(state.password_input.is_empty());
}

#[test]
fn logout_clears_fields_when_already_logged_out() {
    let mut state = SessionState {
        username_input: "someone".to_owned(),
        password_input: "pw".to_owned(),
        ..SessionState::default()
    };
    state.logout();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Status line
// =============================================================

#[test]
fn status_text_reflects_phase() {
    assert_eq!(
        SessionState::default().status_text(),
        "Teacher mode is off. Unregister is restricted."
    );
    assert_eq!(
        logged_in().status_text(),
        "Teacher mode is on (mrodriguez). You can unregister students."
    );
}
