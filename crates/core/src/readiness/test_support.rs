//! In-memory collaborator used by the executor and panel tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::sources::{
    A2pStatus, AgentLinkage, AiSmsSettings, CampaignSnapshot, LeadCounts, PhoneInventory,
    ReadinessSources, StepKind, WorkflowStep,
};
use crate::error::SourceError;
use crate::types::CampaignId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Campaign,
    A2pStatus,
    PhoneInventory,
    LeadCounts,
    AgentLinkage,
    WorkflowSteps,
    AiSmsSettings,
}

pub struct FakeSources {
    campaign: CampaignSnapshot,
    a2p: A2pStatus,
    phones: PhoneInventory,
    leads: LeadCounts,
    agent: AgentLinkage,
    steps: Vec<WorkflowStep>,
    ai_sms: Option<AiSmsSettings>,
    failing: HashSet<Method>,
    delays: HashMap<Method, Duration>,
    calls: AtomicUsize,
}

impl FakeSources {
    /// A campaign for which every check passes.
    pub fn healthy(campaign_id: &str) -> Self {
        Self {
            campaign: CampaignSnapshot {
                id: CampaignId::parse(campaign_id).unwrap(),
                name: "Spring outreach".to_string(),
                agent_id: Some("agent_1".to_string()),
                workflow_id: Some("wf_1".to_string()),
                sms_from_number: Some("+15550101".to_string()),
            },
            a2p: A2pStatus::Approved,
            phones: PhoneInventory {
                active_numbers: 2,
                sms_capable_numbers: 1,
            },
            leads: LeadCounts {
                assigned: 120,
                callable: 110,
            },
            agent: AgentLinkage {
                agent_exists: true,
                phone_number: Some("+15550100".to_string()),
                caller_id_imported: true,
                webhook_url: Some("https://hooks.example.com/retell".to_string()),
            },
            steps: vec![
                WorkflowStep {
                    position: 1,
                    kind: StepKind::Call,
                    wait_minutes: None,
                },
                WorkflowStep {
                    position: 2,
                    kind: StepKind::Wait,
                    wait_minutes: Some(60),
                },
                WorkflowStep {
                    position: 3,
                    kind: StepKind::AiSms,
                    wait_minutes: None,
                },
            ],
            ai_sms: Some(AiSmsSettings {
                enabled: true,
                prompt_configured: true,
            }),
            failing: HashSet::new(),
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_a2p(mut self, status: A2pStatus) -> Self {
        self.a2p = status;
        self
    }

    pub fn with_leads(mut self, leads: LeadCounts) -> Self {
        self.leads = leads;
        self
    }

    pub fn without_agent(mut self) -> Self {
        self.campaign.agent_id = None;
        self
    }

    pub fn without_ai_sms_settings(mut self) -> Self {
        self.ai_sms = None;
        self
    }

    pub fn failing(mut self, method: Method) -> Self {
        self.failing.insert(method);
        self
    }

    pub fn with_delay(mut self, method: Method, delay: Duration) -> Self {
        self.delays.insert(method, delay);
        self
    }

    /// Total number of collaborator calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, method: Method) -> Result<(), SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&method) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&method) {
            return Err(SourceError::Unavailable(format!("{method:?} backend down")));
        }
        Ok(())
    }
}

#[async_trait]
impl ReadinessSources for FakeSources {
    async fn campaign(&self, id: &CampaignId) -> Result<Option<CampaignSnapshot>, SourceError> {
        self.enter(Method::Campaign).await?;
        Ok((self.campaign.id == *id).then(|| self.campaign.clone()))
    }

    async fn a2p_status(&self, _id: &CampaignId) -> Result<A2pStatus, SourceError> {
        self.enter(Method::A2pStatus).await?;
        Ok(self.a2p)
    }

    async fn phone_inventory(&self, _id: &CampaignId) -> Result<PhoneInventory, SourceError> {
        self.enter(Method::PhoneInventory).await?;
        Ok(self.phones)
    }

    async fn lead_counts(&self, _id: &CampaignId) -> Result<LeadCounts, SourceError> {
        self.enter(Method::LeadCounts).await?;
        Ok(self.leads)
    }

    async fn agent_linkage(&self, _agent_id: &str) -> Result<AgentLinkage, SourceError> {
        self.enter(Method::AgentLinkage).await?;
        Ok(self.agent.clone())
    }

    async fn workflow_steps(&self, _workflow_id: &str) -> Result<Vec<WorkflowStep>, SourceError> {
        self.enter(Method::WorkflowSteps).await?;
        Ok(self.steps.clone())
    }

    async fn ai_sms_settings(
        &self,
        _id: &CampaignId,
    ) -> Result<Option<AiSmsSettings>, SourceError> {
        self.enter(Method::AiSmsSettings).await?;
        Ok(self.ai_sms)
    }
}
