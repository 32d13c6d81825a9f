//! Card for a single activity and its participant roster.
//!
//! DESIGN
//! ======
//! The list keys cards by their full content, so a card is rebuilt only when
//! its activity changes. The only live input is the teacher session, which
//! toggles the per-participant unregister button.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::net::types::Activity;
use crate::state::session::SessionState;

/// Availability line text, e.g. `"9 spots left"`.
pub fn spots_label(spots_left: i64) -> String {
    format!("{spots_left} spots left")
}

/// One activity card.
#[component]
pub fn ActivityCard(activity: Activity, on_unregister: Callback<(String, String)>) -> impl IntoView {
    let Activity { name, details } = activity;
    let availability = spots_label(details.spots_left());

    let roster = if details.participants.is_empty() {
        view! {
            <p>
                <em>"No participants yet"</em>
            </p>
        }
            .into_any()
    } else {
        let rows = details
            .participants
            .into_iter()
            .map(|email| {
                view! { <ParticipantRow activity=name.clone() email=email on_unregister=on_unregister/> }
            })
            .collect_view();
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        }
            .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{details.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {details.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{roster}</div>
        </div>
    }
}

/// Roster row; shows the unregister button only in teacher mode.
#[component]
fn ParticipantRow(activity: String, email: String, on_unregister: Callback<(String, String)>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let label = email.clone();

    let unregister_button = move || {
        session.with(SessionState::is_logged_in).then(|| {
            let activity = activity.clone();
            let email = email.clone();
            let data_activity = activity.clone();
            let data_email = email.clone();
            view! {
                <button
                    class="delete-btn"
                    data-activity=data_activity
                    data-email=data_email
                    title="Unregister participant"
                    aria-label="Unregister participant"
                    on:click=move |_| on_unregister.run((activity.clone(), email.clone()))
                >
                    "❌"
                </button>
            }
        })
    };

    view! {
        <li>
            <span class="participant-email">{label}</span>
            {unregister_button}
        </li>
    }
}
