//! Axum router construction for the activities API.
//!
//! Assembles the REST routes and the static file service into a single
//! [`Router`] with CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- redirect to `/static/index.html`
/// - `GET /activities` -- list activities
/// - `POST /activities/{activity_name}/signup` -- sign up (`?email=`)
/// - `DELETE /activities/{activity_name}/remove` -- remove (`?email=`)
/// - `GET /static/*` -- files under [`AppState::static_dir`]
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::signup),
        )
        .route(
            "/activities/{activity_name}/remove",
            delete(handlers::remove_participant),
        )
        .nest_service("/static", static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
