//! Error types for the `mergington-core` crate.
//!
//! Directory operations return [`DirectoryError`]. Callers that only care
//! whether a failure means "not found" or "conflict" use
//! [`DirectoryError::kind`].

/// Coarse classification of a [`DirectoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The activity, or the participant within it, does not exist.
    NotFound,
    /// The participant is already signed up.
    Conflict,
}

/// Errors that can occur during directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No activity with the given name exists.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// The participant is not signed up for the activity.
    #[error("participant {email} is not signed up for {activity}")]
    ParticipantNotFound {
        /// The activity name.
        activity: String,
        /// The participant email.
        email: String,
    },

    /// The participant is already signed up for the activity.
    #[error("participant {email} is already signed up for {activity}")]
    AlreadySignedUp {
        /// The activity name.
        activity: String,
        /// The participant email.
        email: String,
    },
}

impl DirectoryError {
    /// Classify this error as not-found or conflict.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound(_) | Self::ParticipantNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }
}
