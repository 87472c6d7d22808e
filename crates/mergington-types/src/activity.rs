//! Activity records and the catalog that maps names to them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The full directory as served over the wire, keyed by activity name.
///
/// Iterates and serializes in insertion order.
pub type ActivityCatalog = IndexMap<String, Activity>;

/// An extracurricular activity with its schedule, capacity, and sign-ups.
///
/// The activity name is not stored here; it is the key in the
/// [`ActivityCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text description.
    pub description: String,
    /// Free-text meeting days and times.
    pub schedule: String,
    /// Advertised capacity. Not enforced against `participants`.
    pub max_participants: u32,
    /// Participant emails in signup order. Each appears at most once.
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Whether `email` is currently signed up.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Success acknowledgment returned by mutating operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MessageResponse {
    /// Human-readable message shown to the user.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
