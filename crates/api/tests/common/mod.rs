#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use readiness_api::config::ServerConfig;
use readiness_api::router::build_app_router;
use readiness_api::state::AppState;
use readiness_core::error::SourceError;
use readiness_core::readiness::sources::{
    A2pStatus, AgentLinkage, AiSmsSettings, CampaignSnapshot, LeadCounts, PhoneInventory,
    StepKind, WorkflowStep,
};
use readiness_core::readiness::{ReadinessPolicy, ReadinessSources};
use readiness_core::types::CampaignId;

/// Campaign id seeded into [`MemorySources::healthy`].
pub const CAMPAIGN_ID: &str = "cmp_1";

/// In-memory collaborators. One campaign whose every check passes unless a
/// builder breaks it.
#[derive(Clone)]
pub struct MemorySources {
    campaigns: HashMap<String, CampaignSnapshot>,
    a2p: A2pStatus,
    leads: LeadCounts,
    phones: PhoneInventory,
    lookup_down: bool,
    campaign_delay: Option<Duration>,
    a2p_delay: Option<Duration>,
}

impl MemorySources {
    pub fn healthy() -> Self {
        let campaign = CampaignSnapshot {
            id: CampaignId::parse(CAMPAIGN_ID).unwrap(),
            name: "Spring outreach".to_string(),
            agent_id: Some("agent_1".to_string()),
            workflow_id: Some("wf_1".to_string()),
            sms_from_number: Some("+15550101".to_string()),
        };
        Self {
            campaigns: HashMap::from([(CAMPAIGN_ID.to_string(), campaign)]),
            a2p: A2pStatus::Approved,
            leads: LeadCounts {
                assigned: 120,
                callable: 110,
            },
            phones: PhoneInventory {
                active_numbers: 2,
                sms_capable_numbers: 1,
            },
            lookup_down: false,
            campaign_delay: None,
            a2p_delay: None,
        }
    }

    pub fn with_leads(mut self, leads: LeadCounts) -> Self {
        self.leads = leads;
        self
    }

    pub fn with_a2p(mut self, a2p: A2pStatus) -> Self {
        self.a2p = a2p;
        self
    }

    /// Make the campaign lookup itself fail.
    pub fn campaign_lookup_down(mut self) -> Self {
        self.lookup_down = true;
        self
    }

    pub fn with_campaign_delay(mut self, delay: Duration) -> Self {
        self.campaign_delay = Some(delay);
        self
    }

    pub fn with_a2p_delay(mut self, delay: Duration) -> Self {
        self.a2p_delay = Some(delay);
        self
    }
}

#[async_trait]
impl ReadinessSources for MemorySources {
    async fn campaign(&self, id: &CampaignId) -> Result<Option<CampaignSnapshot>, SourceError> {
        if let Some(delay) = self.campaign_delay {
            tokio::time::sleep(delay).await;
        }
        if self.lookup_down {
            return Err(SourceError::Unavailable("connection refused".to_string()));
        }
        Ok(self.campaigns.get(id.as_str()).cloned())
    }

    async fn a2p_status(&self, _id: &CampaignId) -> Result<A2pStatus, SourceError> {
        if let Some(delay) = self.a2p_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.a2p)
    }

    async fn phone_inventory(&self, _id: &CampaignId) -> Result<PhoneInventory, SourceError> {
        Ok(self.phones)
    }

    async fn lead_counts(&self, _id: &CampaignId) -> Result<LeadCounts, SourceError> {
        Ok(self.leads)
    }

    async fn agent_linkage(&self, _agent_id: &str) -> Result<AgentLinkage, SourceError> {
        Ok(AgentLinkage {
            agent_exists: true,
            phone_number: Some("+15550100".to_string()),
            caller_id_imported: true,
            webhook_url: Some("https://hooks.example.com/calls".to_string()),
        })
    }

    async fn workflow_steps(&self, _workflow_id: &str) -> Result<Vec<WorkflowStep>, SourceError> {
        Ok(vec![
            WorkflowStep {
                position: 0,
                kind: StepKind::Call,
                wait_minutes: None,
            },
            WorkflowStep {
                position: 1,
                kind: StepKind::Wait,
                wait_minutes: Some(60),
            },
            WorkflowStep {
                position: 2,
                kind: StepKind::AiSms,
                wait_minutes: None,
            },
        ])
    }

    async fn ai_sms_settings(
        &self,
        _id: &CampaignId,
    ) -> Result<Option<AiSmsSettings>, SourceError> {
        Ok(Some(AiSmsSettings {
            enabled: true,
            prompt_configured: true,
        }))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given collaborators, with the
/// same middleware stack as production.
pub fn build_test_app(sources: MemorySources) -> Router {
    build_test_app_with(sources, test_config(), ReadinessPolicy::default())
}

/// Like [`build_test_app`] with an explicit config and policy.
pub fn build_test_app_with(
    sources: MemorySources,
    config: ServerConfig,
    policy: ReadinessPolicy,
) -> Router {
    let state = AppState {
        sources: Arc::new(sources),
        policy: Arc::new(policy),
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
