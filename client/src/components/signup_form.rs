//! Student signup form (`#signup-form`).

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
#[cfg(feature = "hydrate")]
use crate::state::message::MessageState;

/// Email + activity picker. The dropdown lists the activities from the most
/// recent successful fetch.
#[component]
pub fn SignupForm() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    #[cfg(feature = "hydrate")]
    let messages = expect_context::<RwSignal<MessageState>>();

    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let activity_value = selected.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::pages::activities_actions::{apply, log_fault, signup_outcome};

            let result = crate::net::api::signup(&activity_value, &email_value).await;
            log_fault("signing up", &result);
            let outcome = signup_outcome(result);
            if outcome.reset_form {
                email.set(String::new());
                selected.set(String::new());
            }
            apply(outcome, messages, activities);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, activity_value);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="student@school.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    // Keyed so a refresh keeps existing option nodes and the
                    // current selection survives.
                    <For
                        each=move || activities.with(ActivitiesState::option_names)
                        key=|name: &String| name.clone()
                        children=move |name: String| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
