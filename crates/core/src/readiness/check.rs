//! Individual check results.

use serde::{Deserialize, Serialize};

use super::registry::{CheckDefinition, CheckId};
use crate::error::SourceError;

/// Outcome of a single readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

/// One resolved check within a readiness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessCheck {
    pub id: CheckId,
    pub label: String,
    pub status: CheckStatus,
    pub message: String,
    pub critical: bool,
}

impl ReadinessCheck {
    /// Build a check from its registry definition and a resolved status.
    pub fn from_definition(
        def: &CheckDefinition,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: def.id,
            label: def.label.to_string(),
            status,
            message: message.into(),
            critical: def.critical,
        }
    }

    /// A check whose collaborator query failed.
    ///
    /// Critical checks fail closed; optional checks degrade to a warning.
    pub fn unverified(def: &CheckDefinition, err: &SourceError) -> Self {
        let status = if def.critical {
            CheckStatus::Fail
        } else {
            CheckStatus::Warning
        };
        Self::from_definition(
            def,
            status,
            format!("Could not verify {}: {err}", def.label.to_lowercase()),
        )
    }

    /// Whether this check blocks activation.
    pub fn is_blocking(&self) -> bool {
        self.critical && self.status == CheckStatus::Fail
    }
}
