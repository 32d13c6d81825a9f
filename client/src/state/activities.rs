//! Activity-list state for the board page.
//!
//! DESIGN
//! ======
//! Each refresh takes a ticket from [`ActivitiesState::begin_refresh`] and
//! only the newest ticket may apply its response. Overlapping refreshes (a
//! signup finishing while a login refresh is in flight) therefore cannot roll
//! the list back to an older roster.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::api::ApiError;
use crate::net::types::ActivityList;

/// Where the list area is in its load cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No response applied yet.
    #[default]
    Loading,
    /// Last applied response was a valid activity list.
    Loaded,
    /// Last applied response failed; the list area shows a failure notice.
    Failed,
}

/// Shared activity list backed by REST fetches.
#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    /// Most recent successfully fetched collection.
    pub items: ActivityList,
    pub status: LoadStatus,
    latest_ticket: u64,
}

impl ActivitiesState {
    /// Start a refresh and return its ticket.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Apply the response for `ticket`.
    ///
    /// Returns `false` (and changes nothing) when a newer refresh has been
    /// started since. A failed fetch keeps `items` so the signup dropdown
    /// still lists the last known activities.
    pub fn finish_refresh(&mut self, ticket: u64, result: Result<ActivityList, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Loaded;
            }
            Err(_) => self.status = LoadStatus::Failed,
        }
        true
    }

    /// Number of refreshes issued so far.
    #[must_use]
    pub fn refreshes_started(&self) -> u64 {
        self.latest_ticket
    }

    /// Activity names for the signup dropdown.
    #[must_use]
    pub fn option_names(&self) -> Vec<String> {
        self.items.names()
    }
}
