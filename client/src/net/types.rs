//! Wire DTOs for the activities backend.
//!
//! DESIGN
//! ======
//! The list endpoint returns a JSON object keyed by activity name. It is
//! decoded into an ordered `Vec` so cards render in the order the server sent
//! them, which a `HashMap` would lose.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Activity details as returned by `GET /activities`, minus the name key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ActivityDetails {
    /// Free-text description shown under the heading.
    pub description: String,
    /// Human-readable meeting schedule (e.g. `"Fridays, 3:30 PM"`).
    pub schedule: String,
    /// Roster capacity.
    pub max_participants: i64,
    /// Enrolled participant emails, in server order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Remaining capacity. Negative when the roster is over-full.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let enrolled = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(enrolled)
    }
}

/// A named activity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

/// Full activity collection, kept in server key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityList(pub Vec<Activity>);

impl ActivityList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Activity names in render order, used for the signup dropdown.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }
}

impl<'de> Deserialize<'de> for ActivityList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivityListVisitor;

        impl<'de> Visitor<'de> for ActivityListVisitor {
            type Value = ActivityList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    // Later duplicates replace earlier ones, like a JSON object would.
                    match items.iter().position(|a: &Activity| a.name == name) {
                        Some(idx) => items[idx].details = details,
                        None => items.push(Activity { name, details }),
                    }
                }
                Ok(ActivityList(items))
            }
        }

        deserializer.deserialize_map(ActivityListVisitor)
    }
}

/// Success payload: `{ "message": "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload: `{ "detail": "..." }`.
///
/// `detail` is kept as raw JSON because some backends send validation error
/// arrays here; only string details are shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The detail text when the backend sent a non-empty string.
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
