//! The `#activities-list` area.

#[cfg(test)]
#[path = "activity_list_test.rs"]
mod activity_list_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::net::types::Activity;
use crate::state::activities::{ActivitiesState, LoadStatus};

/// Renders one card per activity from the latest applied fetch, or the
/// loading/failure notice.
///
/// Cards are keyed by their full content, so a refresh only rebuilds cards
/// whose roster or details changed.
#[component]
pub fn ActivityList(on_unregister: Callback<(String, String)>) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let status = Memo::new(move |_| activities.with(|s| s.status));

    view! {
        <div id="activities-list">
            {move || match status.get() {
                LoadStatus::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                LoadStatus::Failed => {
                    view! { <p>"Failed to load activities. Please try again later."</p> }.into_any()
                }
                LoadStatus::Loaded => {
                    view! {
                        <For
                            each=move || activities.with(|s| s.items.0.clone())
                            key=|activity: &Activity| activity.clone()
                            children=move |activity: Activity| {
                                view! { <ActivityCard activity=activity on_unregister=on_unregister/> }
                            }
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
