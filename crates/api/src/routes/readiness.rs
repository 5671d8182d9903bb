//! Route definitions for campaign readiness.

use axum::routing::get;
use axum::Router;

use crate::handlers::readiness;
use crate::state::AppState;

/// Campaign-scoped readiness routes.
///
/// Mounted at `/campaigns`.
///
/// ```text
/// GET    /{campaign_id}/readiness    -> get_campaign_readiness
/// ```
pub fn campaign_readiness_router() -> Router<AppState> {
    Router::new().route(
        "/{campaign_id}/readiness",
        get(readiness::get_campaign_readiness),
    )
}

/// Check catalogue routes.
///
/// Mounted at `/readiness`.
///
/// ```text
/// GET    /checks                     -> list_checks
/// GET    /checks/{check_id}/fix      -> get_check_fix
/// ```
pub fn readiness_checks_router() -> Router<AppState> {
    Router::new()
        .route("/checks", get(readiness::list_checks))
        .route("/checks/{check_id}/fix", get(readiness::get_check_fix))
}
