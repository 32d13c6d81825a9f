//! Activity-list reload.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;

/// Re-fetch the activity list and replace the rendered cards and dropdown.
///
/// Safe to call while another refresh is in flight; only the newest
/// request's response is applied. Failures are logged and leave the list
/// area showing the failure notice. There is no automatic retry.
///
/// Issuing the ticket does not notify subscribers: the rendered list and
/// dropdown only change when a response is applied.
pub fn refresh_activities(activities: RwSignal<ActivitiesState>) {
    let Some(ticket) = activities.try_update_untracked(ActivitiesState::begin_refresh) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_activities().await;
        if let Err(e) = &result {
            log::error!("Error fetching activities: {e}");
        }
        activities.update(|s| {
            if !s.finish_refresh(ticket, result) {
                log::debug!("dropped stale activity list response (ticket {ticket})");
            }
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}
