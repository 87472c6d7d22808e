//! Shared type definitions for the Mergington activities service.
//!
//! These are the wire types served by the HTTP API and consumed by the
//! browser front end. Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`activity`] -- Activity records, the catalog map, and acknowledgment payloads

pub mod activity;

pub use activity::{Activity, ActivityCatalog, MessageResponse};
