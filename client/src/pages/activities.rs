//! Activities board page: list, signup form, teacher login, status line.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the activity list on mount and owns the
//! unregister flow because that action starts from a participant row but
//! needs the session, the confirmation dialog, and a list refresh.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;
use crate::components::teacher_panel::TeacherPanel;
use crate::pages::activities_actions::{UnregisterGate, apply, gate_unregister};
use crate::state::activities::ActivitiesState;
use crate::state::message::MessageState;
use crate::state::session::SessionState;
use crate::util::confirm::confirm;
use crate::util::refresh::refresh_activities;

/// Board page.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessageState>>();

    // Initial load; effects only run in the browser.
    Effect::new(move || refresh_activities(activities));

    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        let authorization = match session.with_untracked(|s| gate_unregister(s, &activity, &email)) {
            UnregisterGate::Denied(outcome) => {
                apply(outcome, messages, activities);
                return;
            }
            UnregisterGate::Confirm { prompt, authorization } => {
                if !confirm(&prompt) {
                    return;
                }
                authorization
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::unregister(&activity, &email, &authorization).await;
            crate::pages::activities_actions::log_fault("unregistering", &result);
            apply(
                crate::pages::activities_actions::unregister_outcome(result),
                messages,
                activities,
            );
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = authorization;
    });

    view! {
        <header>
            <h1>"School Activities"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_unregister=on_unregister/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <StatusMessage/>
            </section>
            <section id="teacher-container">
                <h3>"Teacher Access"</h3>
                <TeacherPanel/>
            </section>
        </main>
    }
}
