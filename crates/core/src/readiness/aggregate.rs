//! Readiness aggregation -- pure logic, no I/O.

use serde::{Deserialize, Serialize};

use super::check::{CheckStatus, ReadinessCheck};

/// Verdict of one readiness run.
///
/// Built fresh on every evaluation and never patched afterwards; callers
/// re-evaluate after any remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReadinessResult {
    pub checks: Vec<ReadinessCheck>,
    pub is_ready: bool,
    pub critical_failures: usize,
    pub warnings: usize,
    pub blocking_reasons: Vec<String>,
}

/// Fold resolved checks into a readiness verdict, preserving check order.
pub fn aggregate(checks: Vec<ReadinessCheck>) -> CampaignReadinessResult {
    let blocking_reasons: Vec<String> = checks
        .iter()
        .filter(|c| c.is_blocking())
        .map(|c| c.message.clone())
        .collect();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();
    let critical_failures = blocking_reasons.len();

    CampaignReadinessResult {
        checks,
        is_ready: critical_failures == 0,
        critical_failures,
        warnings,
        blocking_reasons,
    }
}

impl CampaignReadinessResult {
    /// Find a check in this result by id.
    pub fn check(&self, id: super::CheckId) -> Option<&ReadinessCheck> {
        self.checks.iter().find(|c| c.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
