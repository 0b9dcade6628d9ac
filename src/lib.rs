//! # pgconf
//!
//! Typed Postgres connection settings for services that read their
//! database credentials from the environment.
//!
//! Loads `POSTGRES_*` variables once at startup, resolves a file-mounted
//! password when one is given, and derives a percent-encoded connection URI.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::Settings;
