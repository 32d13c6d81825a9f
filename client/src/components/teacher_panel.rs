//! Teacher login/logout controls (`#teacher-username`, `#teacher-password`,
//! `#teacher-login-btn`, `#teacher-logout-btn`, `#teacher-status`).
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the basic-auth header in the session context and
//! refreshes the list so unregister buttons appear. Nothing is persisted.

use leptos::prelude::*;

use crate::pages::activities_actions::{apply, logout_outcome};
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageKind, MessageState};
use crate::state::session::SessionState;
use crate::util::basic_auth::basic_auth_header;
use crate::util::notify::flash;

#[component]
pub fn TeacherPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let messages = expect_context::<RwSignal<MessageState>>();

    let logged_in = move || session.with(SessionState::is_logged_in);

    let on_login = move |_| {
        if session.with_untracked(|s| s.verifying) {
            return;
        }
        let (username, password) = match session.with_untracked(SessionState::credentials) {
            Ok(credentials) => credentials,
            Err(msg) => {
                flash(messages, MessageKind::Error, msg);
                return;
            }
        };
        let authorization = basic_auth_header(&username, &password);
        session.update(|s| s.verifying = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::pages::activities_actions::{finish_login, log_fault};

            let result = crate::net::api::verify_teacher(&authorization).await;
            log_fault("during teacher login", &result);
            finish_login(session, messages, activities, username, authorization, &result);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (username, authorization);
    };

    let on_logout = move |_| {
        session.update(SessionState::logout);
        apply(logout_outcome(), messages, activities);
    };

    view! {
        <div class="teacher-auth">
            <div class="form-group">
                <label for="teacher-username">"Username:"</label>
                <input
                    type="text"
                    id="teacher-username"
                    autocomplete="username"
                    prop:value=move || session.with(|s| s.username_input.clone())
                    prop:disabled=logged_in
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.username_input = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="teacher-password">"Password:"</label>
                <input
                    type="password"
                    id="teacher-password"
                    autocomplete="current-password"
                    prop:value=move || session.with(|s| s.password_input.clone())
                    prop:disabled=logged_in
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.password_input = value);
                    }
                />
            </div>
            <button
                type="button"
                id="teacher-login-btn"
                class:hidden=logged_in
                disabled=move || session.with(|s| s.verifying)
                on:click=on_login
            >
                "Teacher Login"
            </button>
            <button
                type="button"
                id="teacher-logout-btn"
                class:hidden=move || !logged_in()
                on:click=on_logout
            >
                "Logout"
            </button>
            <p id="teacher-status">{move || session.with(SessionState::status_text)}</p>
        </div>
    }
}
