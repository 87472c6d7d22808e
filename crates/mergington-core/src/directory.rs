//! The activity directory: a name-keyed map of activities whose only
//! runtime mutation is adding and removing participants.
//!
//! Activities are fixed at construction. [`ActivityDirectory::signup`] and
//! [`ActivityDirectory::remove_participant`] are the only writes, and each
//! leaves the directory unchanged when it fails.

use mergington_types::{Activity, ActivityCatalog, MessageResponse};
use tracing::debug;

use crate::error::DirectoryError;
use crate::seed::seed_activities;

/// Owned store of activities, keyed by unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDirectory {
    activities: ActivityCatalog,
}

impl ActivityDirectory {
    /// Create a directory over the given catalog.
    pub const fn new(activities: ActivityCatalog) -> Self {
        Self { activities }
    }

    /// Create a directory populated with the seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the directory holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// All activities, keyed by name, in catalog order.
    pub const fn list(&self) -> &ActivityCatalog {
        &self.activities
    }

    /// Look up a single activity.
    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    /// Sign `email` up for `activity_name`, appending it to the participants.
    ///
    /// Capacity is not checked.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ActivityNotFound`] if the activity does not exist,
    /// [`DirectoryError::AlreadySignedUp`] if `email` is already a participant.
    pub fn signup(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_owned()))?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());
        debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            "participant appended"
        );

        Ok(MessageResponse::new(format!(
            "{email} inscrito(a) em {activity_name} com sucesso"
        )))
    }

    /// Remove `email` from `activity_name`, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ActivityNotFound`] if the activity does not exist,
    /// [`DirectoryError::ParticipantNotFound`] if `email` is not a participant.
    pub fn remove_participant(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_owned()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::ParticipantNotFound {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            })?;

        activity.participants.remove(position);
        debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            "participant removed"
        );

        Ok(MessageResponse::new(format!(
            "{email} removido(a) de {activity_name} com sucesso"
        )))
    }
}
