//! Postgres implementation of the readiness collaborators.

use async_trait::async_trait;
use readiness_core::error::SourceError;
use readiness_core::readiness::sources::{
    A2pStatus, AgentLinkage, AiSmsSettings, CampaignSnapshot, LeadCounts, PhoneInventory,
    ReadinessSources, WorkflowStep,
};
use readiness_core::types::CampaignId;

use crate::models::agent;
use crate::repositories::{
    A2pRegistrationRepo, AgentRepo, AiSmsSettingsRepo, CampaignRepo, LeadRepo, PhoneNumberRepo,
    WorkflowStepRepo,
};
use crate::DbPool;

/// Reads readiness facts from the campaign schema. Read-only.
#[derive(Clone)]
pub struct PgReadinessSources {
    pool: DbPool,
}

impl PgReadinessSources {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadinessSources for PgReadinessSources {
    async fn campaign(&self, id: &CampaignId) -> Result<Option<CampaignSnapshot>, SourceError> {
        let row = CampaignRepo::find_by_id(&self.pool, id.as_str())
            .await
            .map_err(source_error)?;
        row.map(|c| c.into_snapshot().map_err(SourceError::Query))
            .transpose()
    }

    async fn a2p_status(&self, id: &CampaignId) -> Result<A2pStatus, SourceError> {
        let status = A2pRegistrationRepo::latest_status_for_campaign(&self.pool, id.as_str())
            .await
            .map_err(source_error)?;
        match status {
            Some(s) => A2pStatus::from_str_value(&s).map_err(SourceError::Query),
            None => Ok(A2pStatus::NotStarted),
        }
    }

    async fn phone_inventory(&self, id: &CampaignId) -> Result<PhoneInventory, SourceError> {
        let (active, sms_capable) = PhoneNumberRepo::inventory_for_campaign(&self.pool, id.as_str())
            .await
            .map_err(source_error)?;
        Ok(PhoneInventory {
            active_numbers: to_count(active),
            sms_capable_numbers: to_count(sms_capable),
        })
    }

    async fn lead_counts(&self, id: &CampaignId) -> Result<LeadCounts, SourceError> {
        let (assigned, callable) = LeadRepo::counts_for_campaign(&self.pool, id.as_str())
            .await
            .map_err(source_error)?;
        Ok(LeadCounts {
            assigned: to_count(assigned),
            callable: to_count(callable),
        })
    }

    async fn agent_linkage(&self, agent_id: &str) -> Result<AgentLinkage, SourceError> {
        let row = AgentRepo::find_by_id(&self.pool, agent_id)
            .await
            .map_err(source_error)?;
        Ok(agent::linkage(row))
    }

    async fn workflow_steps(&self, workflow_id: &str) -> Result<Vec<WorkflowStep>, SourceError> {
        WorkflowStepRepo::list_by_workflow(&self.pool, workflow_id)
            .await
            .map_err(source_error)?
            .into_iter()
            .map(|row| row.into_step().map_err(SourceError::Query))
            .collect()
    }

    async fn ai_sms_settings(
        &self,
        id: &CampaignId,
    ) -> Result<Option<AiSmsSettings>, SourceError> {
        let row = AiSmsSettingsRepo::find_by_campaign(&self.pool, id.as_str())
            .await
            .map_err(source_error)?;
        Ok(row.map(|(enabled, prompt)| AiSmsSettings {
            enabled,
            prompt_configured: prompt.is_some_and(|p| !p.trim().is_empty()),
        }))
    }
}

/// Classify a sqlx error as an unreachable backend or a failed query.
fn source_error(err: sqlx::Error) -> SourceError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "Readiness data source unavailable");
            SourceError::Unavailable(err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Readiness query failed");
            SourceError::Query(other.to_string())
        }
    }
}

/// Postgres `COUNT(*)` is `BIGINT`; saturate into the fact type.
fn to_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}
