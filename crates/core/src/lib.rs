//! `readiness-core` -- campaign readiness evaluation.
//!
//! Pure decision logic plus the async executor that fans out over the
//! injected collaborators. This crate has no database, HTTP, or environment
//! dependencies; callers supply a [`readiness::ReadinessSources`]
//! implementation and a [`readiness::ReadinessPolicy`].

pub mod error;
pub mod readiness;
pub mod types;
