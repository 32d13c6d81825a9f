//! Teacher-session state for the current page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gates unregister controls and supplies the `Authorization`
//! header for unregister calls. It lives only in memory: every page load
//! starts logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Credential-validation message shown when either login field is empty.
pub const MISSING_CREDENTIALS: &str = "Enter teacher username and password.";

/// A verified teacher login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeacherSession {
    /// Trimmed username, echoed in the status line.
    pub username: String,
    /// Full `Authorization` header value (`Basic ...`).
    pub authorization: String,
}

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Teacher login panel state: the session plus its two credential inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub teacher: Option<TeacherSession>,
    pub username_input: String,
    pub password_input: String,
    /// A verification request is in flight.
    pub verifying: bool,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.teacher.is_some() {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.phase() == SessionPhase::LoggedIn
    }

    /// `Authorization` header value for gated calls, when logged in.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.teacher.as_ref().map(|t| t.authorization.as_str())
    }

    /// Validate the credential inputs.
    ///
    /// The username is trimmed; the password is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_CREDENTIALS`] when either field is empty.
    pub fn credentials(&self) -> Result<(String, String), &'static str> {
        let username = self.username_input.trim();
        if username.is_empty() || self.password_input.is_empty() {
            return Err(MISSING_CREDENTIALS);
        }
        Ok((username.to_owned(), self.password_input.clone()))
    }

    /// LoggedOut -> LoggedIn. The password input is cleared; the username
    /// stays visible in its (now disabled) field.
    pub fn login_succeeded(&mut self, username: String, authorization: String) {
        self.teacher = Some(TeacherSession { username, authorization });
        self.password_input.clear();
        self.verifying = false;
    }

    /// Any state -> LoggedOut after a rejected or failed verification.
    pub fn login_failed(&mut self) {
        self.teacher = None;
        self.verifying = false;
    }

    /// Any state -> LoggedOut, wiping both credential inputs.
    pub fn logout(&mut self) {
        self.teacher = None;
        self.username_input.clear();
        self.password_input.clear();
        self.verifying = false;
    }

    /// Text for the `teacher-status` line.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.teacher {
            Some(teacher) => format!(
                "Teacher mode is on ({}). You can unregister students.",
                teacher.username
            ),
            None => "Teacher mode is off. Unregister is restricted.".to_owned(),
        }
    }
}
