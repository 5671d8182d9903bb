//! Row structs for the campaign schema.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row and its conversion into the core's readiness facts.

pub mod agent;
pub mod campaign;
pub mod workflow_step;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
