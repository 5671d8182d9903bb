pub mod health;
pub mod readiness;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /campaigns/{campaign_id}/readiness        evaluate (GET)
///
/// /readiness/checks                         registry (GET)
/// /readiness/checks/{check_id}/fix          fix target (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campaigns", readiness::campaign_readiness_router())
        .nest("/readiness", readiness::readiness_checks_router())
}
