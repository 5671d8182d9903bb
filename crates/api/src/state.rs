use std::sync::Arc;

use readiness_core::readiness::{ReadinessPolicy, ReadinessSources};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Collaborators the checks read from (Postgres in production).
    pub sources: Arc<dyn ReadinessSources>,
    /// Thresholds and per-check timeout for every run.
    pub policy: Arc<ReadinessPolicy>,
}
