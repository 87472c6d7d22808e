//! Activity directory and service configuration for Mergington High School.
//!
//! # Modules
//!
//! - [`directory`] -- The owned activity store and its signup/removal operations
//! - [`seed`] -- The catalog the directory starts with
//! - [`config`] -- YAML configuration with environment overrides
//! - [`error`] -- Directory error types

pub mod config;
pub mod directory;
pub mod error;
pub mod seed;

pub use config::{ConfigError, LoggingConfig, ServerSettings, ServiceConfig};
pub use directory::ActivityDirectory;
pub use error::{DirectoryError, ErrorKind};
pub use seed::seed_activities;
