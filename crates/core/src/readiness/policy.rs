//! Configurable thresholds for the threshold-based checks.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Default per-check query timeout.
pub const DEFAULT_CHECK_TIMEOUT_MS: u64 = 5_000;

/// Default minimum delay of a workflow wait step before it is flagged.
pub const DEFAULT_MIN_WAIT_MINUTES: u32 = 1;

/// Policy knobs that decide warning vs fail where product rules are soft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReadinessPolicy {
    /// Upper bound on each check's collaborator queries.
    #[validate(range(min = 1, max = 60_000))]
    pub check_timeout_ms: u64,
    /// Treat an A2P registration still under carrier review as a warning
    /// instead of a failure.
    pub allow_pending_a2p: bool,
    /// Warn when fewer leads than this are assigned. `0` disables the warning.
    #[validate(range(max = 1_000_000))]
    pub low_lead_threshold: u32,
    /// Warn on wait steps shorter than this many minutes.
    #[validate(range(max = 10_080))]
    pub min_wait_minutes: u32,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            check_timeout_ms: DEFAULT_CHECK_TIMEOUT_MS,
            allow_pending_a2p: false,
            low_lead_threshold: 0,
            min_wait_minutes: DEFAULT_MIN_WAIT_MINUTES,
        }
    }
}

impl ReadinessPolicy {
    pub fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }

    /// Validate the policy, mapping field errors to [`CoreError::Validation`].
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("Invalid readiness policy: {e}")))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = ReadinessPolicy::default().validated().unwrap();
        assert_eq!(policy.check_timeout(), Duration::from_secs(5));
        assert!(!policy.allow_pending_a2p);
    }

    #[test]
    fn zero_timeout_rejected() {
        let policy = ReadinessPolicy {
            check_timeout_ms: 0,
            ..Default::default()
        };
        assert_matches!(policy.validated(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overlong_wait_threshold_rejected() {
        let policy = ReadinessPolicy {
            min_wait_minutes: 20_000,
            ..Default::default()
        };
        assert!(policy.validated().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let policy: ReadinessPolicy =
            serde_json::from_value(serde_json::json!({ "allow_pending_a2p": true })).unwrap();
        assert!(policy.allow_pending_a2p);
        assert_eq!(policy.check_timeout_ms, DEFAULT_CHECK_TIMEOUT_MS);
        assert_eq!(policy.min_wait_minutes, DEFAULT_MIN_WAIT_MINUTES);
    }
}
