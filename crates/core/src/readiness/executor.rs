//! Check executor.
//!
//! Loads the campaign, then resolves every registered check concurrently.
//! Each check runs its own collaborator queries under the policy timeout, so
//! one slow or broken collaborator only affects the checks that use it.
//! Dropping the returned future drops every in-flight query with it.

use futures::future::join_all;

use super::aggregate::{aggregate, CampaignReadinessResult};
use super::check::{CheckStatus, ReadinessCheck};
use super::classify::{self, Verdict};
use super::policy::ReadinessPolicy;
use super::registry::{registry, CheckDefinition, CheckId, CAMPAIGN_NOT_FOUND};
use super::sources::{AgentLinkage, CampaignSnapshot, ReadinessSources, WorkflowStep};
use crate::error::{CoreError, SourceError};
use crate::types::CampaignId;

/// Everything a single check may read. Shared immutably by all checks.
struct CheckContext<'a> {
    campaign: &'a CampaignSnapshot,
    sources: &'a dyn ReadinessSources,
    policy: &'a ReadinessPolicy,
}

impl CheckContext<'_> {
    /// `None` when the campaign has no agent assigned.
    async fn agent_linkage(&self) -> Result<Option<AgentLinkage>, SourceError> {
        match self.campaign.agent_id.as_deref() {
            Some(agent_id) => self.sources.agent_linkage(agent_id).await.map(Some),
            None => Ok(None),
        }
    }

    /// `None` when the campaign has no workflow attached.
    async fn workflow_steps(&self) -> Result<Option<Vec<WorkflowStep>>, SourceError> {
        match self.campaign.workflow_id.as_deref() {
            Some(workflow_id) => self.sources.workflow_steps(workflow_id).await.map(Some),
            None => Ok(None),
        }
    }
}

/// Resolve every registered check for a campaign, in registry order.
///
/// Returns a single synthetic `campaign_not_found` check when the campaign
/// does not exist. Per-check query failures are folded into the affected
/// check; only a failed campaign lookup is returned as an error.
pub async fn run_checks(
    campaign_id: &CampaignId,
    sources: &dyn ReadinessSources,
    policy: &ReadinessPolicy,
) -> Result<Vec<ReadinessCheck>, CoreError> {
    let timeout = policy.check_timeout();

    let lookup = match tokio::time::timeout(timeout, sources.campaign(campaign_id)).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(timeout)),
    };

    let campaign = match lookup {
        Ok(Some(campaign)) => campaign,
        Ok(None) => {
            tracing::info!(campaign_id = %campaign_id, "Readiness requested for unknown campaign");
            return Ok(vec![campaign_not_found(campaign_id)]);
        }
        Err(e) => {
            tracing::error!(campaign_id = %campaign_id, error = %e, "Campaign lookup failed");
            return Err(CoreError::Unavailable(format!(
                "Could not load campaign {campaign_id}: {e}"
            )));
        }
    };

    let ctx = CheckContext {
        campaign: &campaign,
        sources,
        policy,
    };

    let checks = join_all(registry().iter().map(|def| run_check(def, &ctx))).await;

    tracing::debug!(
        campaign_id = %campaign_id,
        checks = checks.len(),
        "Readiness checks resolved"
    );

    Ok(checks)
}

/// Run all checks and aggregate them into a verdict.
pub async fn evaluate_campaign(
    campaign_id: &CampaignId,
    sources: &dyn ReadinessSources,
    policy: &ReadinessPolicy,
) -> Result<CampaignReadinessResult, CoreError> {
    let checks = run_checks(campaign_id, sources, policy).await?;
    let result = aggregate(checks);

    tracing::info!(
        campaign_id = %campaign_id,
        is_ready = result.is_ready,
        critical_failures = result.critical_failures,
        warnings = result.warnings,
        "Campaign readiness evaluated"
    );

    Ok(result)
}

fn campaign_not_found(campaign_id: &CampaignId) -> ReadinessCheck {
    ReadinessCheck::from_definition(
        &CAMPAIGN_NOT_FOUND,
        CheckStatus::Fail,
        format!("Campaign {campaign_id} was not found"),
    )
}

async fn run_check(def: &CheckDefinition, ctx: &CheckContext<'_>) -> ReadinessCheck {
    let timeout = ctx.policy.check_timeout();
    let outcome = match tokio::time::timeout(timeout, resolve(def.id, ctx)).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(timeout)),
    };

    match outcome {
        Ok(verdict) => ReadinessCheck::from_definition(def, verdict.status, verdict.message),
        Err(e) => {
            tracing::warn!(
                campaign_id = %ctx.campaign.id,
                check = %def.id,
                error = %e,
                "Readiness check could not be verified"
            );
            ReadinessCheck::unverified(def, &e)
        }
    }
}

async fn resolve(id: CheckId, ctx: &CheckContext<'_>) -> Result<Verdict, SourceError> {
    let campaign_id = &ctx.campaign.id;
    let verdict = match id {
        CheckId::A2pRegistration => {
            classify::classify_a2p(ctx.sources.a2p_status(campaign_id).await?, ctx.policy)
        }
        CheckId::SmsPhoneNumber => {
            classify::classify_sms_phone_number(&ctx.sources.phone_inventory(campaign_id).await?)
        }
        CheckId::PhoneNumbers => {
            classify::classify_phone_numbers(&ctx.sources.phone_inventory(campaign_id).await?)
        }
        CheckId::LeadsAssigned => {
            classify::classify_leads(&ctx.sources.lead_counts(campaign_id).await?, ctx.policy)
        }
        CheckId::AiAgent => classify::classify_ai_agent(ctx.agent_linkage().await?.as_ref()),
        CheckId::AgentPhone => classify::classify_agent_phone(ctx.agent_linkage().await?.as_ref()),
        CheckId::CallerIdRetell => {
            classify::classify_caller_id(ctx.agent_linkage().await?.as_ref())
        }
        CheckId::Webhook => classify::classify_webhook(ctx.agent_linkage().await?.as_ref()),
        CheckId::WaitStepsConfig => {
            let steps = ctx.workflow_steps().await?;
            classify::classify_wait_steps(steps.as_deref(), ctx.policy)
        }
        CheckId::CampaignSmsNumber => {
            let steps = ctx.workflow_steps().await?;
            classify::classify_campaign_sms_number(ctx.campaign, steps.as_deref())
        }
        CheckId::AiSmsSettings => {
            let settings = ctx.sources.ai_sms_settings(campaign_id).await?;
            classify::classify_ai_sms_settings(settings.as_ref())
        }
        // The campaign was found if we got here.
        CheckId::CampaignNotFound => Verdict::pass(format!("Campaign {campaign_id} found")),
    };
    Ok(verdict)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
