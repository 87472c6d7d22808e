//! Activities API server for Mergington High School.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities and for signing
//!   participants up and removing them
//! - **Static files** (`/static/*`) for the browser front end, with `GET /`
//!   redirecting to the landing page
//!
//! # Architecture
//!
//! All handlers operate on the [`ActivityDirectory`] owned by
//! [`AppState`]. State is injected through the router, so every test
//! builds its own isolated directory.
//!
//! [`ActivityDirectory`]: mergington_core::ActivityDirectory

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
