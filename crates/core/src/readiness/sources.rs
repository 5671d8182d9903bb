//! Read-only collaborator capabilities consumed by the executor.
//!
//! Each method is an opaque `query(campaign) -> facts-or-error` capability.
//! The executor only needs boolean/count-shaped facts, so these types carry
//! nothing beyond what a check classifies on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::types::CampaignId;

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

/// The campaign attributes the checks read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub id: CampaignId,
    pub name: String,
    pub agent_id: Option<String>,
    pub workflow_id: Option<String>,
    pub sms_from_number: Option<String>,
}

/// Carrier A2P (application-to-person) registration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum A2pStatus {
    NotStarted,
    Pending,
    Approved,
    Rejected,
}

impl A2pStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid A2P status '{s}'. Must be one of: not_started, pending, approved, rejected"
            )),
        }
    }
}

/// Phone numbers available to the account placing the campaign's calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneInventory {
    pub active_numbers: u32,
    pub sms_capable_numbers: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCounts {
    /// Leads associated with the campaign.
    pub assigned: u32,
    /// Assigned leads that can actually be dialed (valid number, not on a
    /// do-not-call list).
    pub callable: u32,
}

/// Linkage between the campaign's voice agent and telephony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLinkage {
    /// Whether the assigned agent still exists upstream.
    pub agent_exists: bool,
    /// Phone number bound to the agent, if any.
    pub phone_number: Option<String>,
    /// Whether that number is imported into Retell as a caller id.
    pub caller_id_imported: bool,
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Call,
    Sms,
    AiSms,
    Wait,
}

impl StepKind {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "call" => Ok(Self::Call),
            "sms" => Ok(Self::Sms),
            "ai_sms" => Ok(Self::AiSms),
            "wait" => Ok(Self::Wait),
            _ => Err(format!(
                "Invalid workflow step type '{s}'. Must be one of: call, sms, ai_sms, wait"
            )),
        }
    }

    /// Whether the step sends a text message from the campaign number.
    pub fn sends_sms(&self) -> bool {
        matches!(self, Self::Sms | Self::AiSms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub position: u32,
    pub kind: StepKind,
    /// Delay for `Wait` steps; ignored for other kinds.
    pub wait_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSmsSettings {
    pub enabled: bool,
    pub prompt_configured: bool,
}

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Read-only queries the readiness executor depends on.
///
/// Implementations must not mutate campaign state. Every method is called
/// independently per check, possibly concurrently.
#[async_trait]
pub trait ReadinessSources: Send + Sync {
    /// Load the campaign, or `None` when it does not exist.
    async fn campaign(&self, id: &CampaignId) -> Result<Option<CampaignSnapshot>, SourceError>;

    async fn a2p_status(&self, id: &CampaignId) -> Result<A2pStatus, SourceError>;

    async fn phone_inventory(&self, id: &CampaignId) -> Result<PhoneInventory, SourceError>;

    async fn lead_counts(&self, id: &CampaignId) -> Result<LeadCounts, SourceError>;

    /// Linkage for the given agent; only called when the campaign has one.
    async fn agent_linkage(&self, agent_id: &str) -> Result<AgentLinkage, SourceError>;

    /// Steps of the given workflow, ordered by position.
    async fn workflow_steps(&self, workflow_id: &str) -> Result<Vec<WorkflowStep>, SourceError>;

    async fn ai_sms_settings(&self, id: &CampaignId)
        -> Result<Option<AiSmsSettings>, SourceError>;
}
