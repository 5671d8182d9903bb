//! Shared identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum accepted length of a campaign id, in bytes.
pub const MAX_CAMPAIGN_ID_LENGTH: usize = 128;

/// Opaque campaign identifier (a Supabase row id in production).
///
/// The evaluator never interprets the value; it only guarantees the id is
/// well-formed before any collaborator is queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CampaignId(String);

impl CampaignId {
    /// Parse and validate a raw campaign id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::Validation(
                "campaign id must not be empty".to_string(),
            ));
        }
        if raw.len() > MAX_CAMPAIGN_ID_LENGTH {
            return Err(CoreError::Validation(format!(
                "campaign id exceeds maximum length of {MAX_CAMPAIGN_ID_LENGTH}"
            )));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CoreError::Validation(
                "campaign id must not contain whitespace or control characters".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CampaignId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CampaignId> for String {
    fn from(id: CampaignId) -> Self {
        id.0
    }
}
