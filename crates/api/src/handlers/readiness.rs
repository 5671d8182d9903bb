//! Handlers for campaign readiness.
//!
//! Evaluation always runs against live collaborator data; nothing is cached
//! between requests.

use std::str::FromStr;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use readiness_core::error::CoreError;
use readiness_core::readiness::{
    evaluate_campaign, fix_target, registry, route_for, CampaignReadinessResult, CheckId,
    FixTarget, ReadinessCheck,
};
use readiness_core::types::CampaignId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// A resolved check together with where the operator goes to fix it.
#[derive(Debug, Serialize)]
pub struct AnnotatedCheck {
    #[serde(flatten)]
    pub check: ReadinessCheck,
    /// `null` for passing checks.
    pub fix: Option<FixTarget>,
}

/// One readiness evaluation as returned to the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub campaign_id: CampaignId,
    pub evaluated_at: DateTime<Utc>,
    pub is_ready: bool,
    pub critical_failures: usize,
    pub warnings: usize,
    pub blocking_reasons: Vec<String>,
    pub checks: Vec<AnnotatedCheck>,
}

impl ReadinessReport {
    pub fn new(campaign_id: CampaignId, result: CampaignReadinessResult) -> Self {
        let checks = result
            .checks
            .into_iter()
            .map(|check| AnnotatedCheck {
                fix: fix_target(&check),
                check,
            })
            .collect();

        Self {
            campaign_id,
            evaluated_at: Utc::now(),
            is_ready: result.is_ready,
            critical_failures: result.critical_failures,
            warnings: result.warnings,
            blocking_reasons: result.blocking_reasons,
            checks,
        }
    }
}

/// A registered check as listed by the catalogue endpoint.
#[derive(Debug, Serialize)]
pub struct CheckDescriptor {
    pub id: CheckId,
    pub label: &'static str,
    pub critical: bool,
    pub fix: Option<FixTarget>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /campaigns/{campaign_id}/readiness
///
/// Run every registered check against the campaign and aggregate the result.
pub async fn get_campaign_readiness(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let campaign_id = CampaignId::parse(campaign_id)?;

    let result = evaluate_campaign(&campaign_id, state.sources.as_ref(), &state.policy).await?;

    Ok(Json(DataResponse {
        data: ReadinessReport::new(campaign_id, result),
    }))
}

/// GET /readiness/checks
///
/// The check registry in evaluation order.
pub async fn list_checks() -> AppResult<impl IntoResponse> {
    let checks: Vec<CheckDescriptor> = registry()
        .iter()
        .map(|def| CheckDescriptor {
            id: def.id,
            label: def.label,
            critical: def.critical,
            fix: route_for(def.id),
        })
        .collect();

    Ok(Json(DataResponse { data: checks }))
}

/// GET /readiness/checks/{check_id}/fix
///
/// Remediation target for a check id. 404 when the id is unknown or the check
/// has nothing to fix.
pub async fn get_check_fix(Path(check_id): Path<String>) -> AppResult<impl IntoResponse> {
    let id = CheckId::from_str(&check_id).map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "ReadinessCheck",
            id: check_id.clone(),
        })
    })?;

    let target = route_for(id).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "FixTarget",
            id: check_id,
        })
    })?;

    Ok(Json(DataResponse { data: target }))
}
