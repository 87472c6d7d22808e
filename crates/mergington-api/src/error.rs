//! Error types for the activities API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The body
//! carries the user-facing message under `detail`, which is what the
//! browser front end displays.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::DirectoryError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The query string was missing a field or could not be parsed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Unknown activities and participants answer `404`, duplicate
    /// signups and malformed queries `400`.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Directory(
                DirectoryError::ActivityNotFound(_) | DirectoryError::ParticipantNotFound { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Directory(DirectoryError::AlreadySignedUp { .. }) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message.
    pub fn detail(&self) -> String {
        match self {
            Self::Directory(DirectoryError::ActivityNotFound(_)) => {
                "Atividade não encontrada".to_owned()
            }
            Self::Directory(DirectoryError::ParticipantNotFound { .. }) => {
                "Participante não encontrado nesta atividade".to_owned()
            }
            Self::Directory(DirectoryError::AlreadySignedUp { .. }) => {
                "Estudante já inscrito nesta atividade".to_owned()
            }
            Self::InvalidQuery(msg) => msg.clone(),
            Self::Serialization(e) => format!("JSON error: {e}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = serde_json::json!({
            "detail": self.detail(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
