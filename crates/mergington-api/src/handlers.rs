//! REST endpoint handlers for the activities API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the static landing page |
//! | `GET` | `/activities` | Full directory, keyed by activity name |
//! | `POST` | `/activities/:name/signup?email=` | Sign a participant up |
//! | `DELETE` | `/activities/:name/remove?email=` | Remove a participant |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Redirect};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Path of the landing page the root URL redirects to.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Query parameters identifying the participant.
#[derive(Debug, serde::Deserialize)]
pub struct EmailQuery {
    /// Participant email.
    pub email: String,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Redirect to the static landing page.
pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

// ---------------------------------------------------------------------------
// GET /activities
// ---------------------------------------------------------------------------

/// Return every activity with its participants, in catalog order.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = serde_json::to_vec(state.directory.read().await.list())?;
    Ok(([(CONTENT_TYPE, "application/json")], body))
}

// ---------------------------------------------------------------------------
// POST /activities/{activity_name}/signup
// ---------------------------------------------------------------------------

/// Sign a participant up for an activity.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let result = state
        .directory
        .write()
        .await
        .signup(&activity_name, &query.email);

    match result {
        Ok(ack) => {
            info!(activity = %activity_name, email = %query.email, "participant signed up");
            Ok(Json(ack))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

// ---------------------------------------------------------------------------
// DELETE /activities/{activity_name}/remove
// ---------------------------------------------------------------------------

/// Remove a participant from an activity.
pub async fn remove_participant(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let result = state
        .directory
        .write()
        .await
        .remove_participant(&activity_name, &query.email);

    match result {
        Ok(ack) => {
            info!(activity = %activity_name, email = %query.email, "participant removed");
            Ok(Json(ack))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "removal rejected");
            Err(e.into())
        }
    }
}
