//! Campaign model.

use readiness_core::readiness::sources::CampaignSnapshot;
use readiness_core::types::CampaignId;
use serde::Serialize;
use sqlx::FromRow;

use super::Timestamp;

/// A row from the `campaigns` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Campaign {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub agent_id: Option<String>,
    pub workflow_id: Option<String>,
    pub sms_from_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Campaign {
    /// Project the row onto the attributes the readiness checks read.
    ///
    /// Blank optional columns are treated as unset.
    pub fn into_snapshot(self) -> Result<CampaignSnapshot, String> {
        let id = CampaignId::parse(self.id).map_err(|e| e.to_string())?;
        Ok(CampaignSnapshot {
            id,
            name: self.name,
            agent_id: non_blank(self.agent_id),
            workflow_id: non_blank(self.workflow_id),
            sms_from_number: non_blank(self.sms_from_number),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
