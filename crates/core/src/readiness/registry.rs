//! Check definition registry.
//!
//! The single source of truth for which checks run, their order, their
//! labels, and whether a failure blocks activation. Criticality is static;
//! nothing at runtime can change it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Check ids
// ---------------------------------------------------------------------------

/// Stable identifier of a readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    A2pRegistration,
    SmsPhoneNumber,
    PhoneNumbers,
    LeadsAssigned,
    AiAgent,
    AgentPhone,
    CallerIdRetell,
    WaitStepsConfig,
    AiSmsSettings,
    CampaignSmsNumber,
    Webhook,
    /// Synthetic check emitted in place of the whole registry when the
    /// campaign does not exist. Never part of [`registry`].
    CampaignNotFound,
}

impl CheckId {
    /// Every id, registry order first, synthetic ids last.
    pub const ALL: [CheckId; 12] = [
        Self::A2pRegistration,
        Self::SmsPhoneNumber,
        Self::PhoneNumbers,
        Self::LeadsAssigned,
        Self::AiAgent,
        Self::AgentPhone,
        Self::CallerIdRetell,
        Self::WaitStepsConfig,
        Self::AiSmsSettings,
        Self::CampaignSmsNumber,
        Self::Webhook,
        Self::CampaignNotFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A2pRegistration => "a2p_registration",
            Self::SmsPhoneNumber => "sms_phone_number",
            Self::PhoneNumbers => "phone_numbers",
            Self::LeadsAssigned => "leads_assigned",
            Self::AiAgent => "ai_agent",
            Self::AgentPhone => "agent_phone",
            Self::CallerIdRetell => "caller_id_retell",
            Self::WaitStepsConfig => "wait_steps_config",
            Self::AiSmsSettings => "ai_sms_settings",
            Self::CampaignSmsNumber => "campaign_sms_number",
            Self::Webhook => "webhook",
            Self::CampaignNotFound => "campaign_not_found",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown readiness check '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Static description of one readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckDefinition {
    pub id: CheckId,
    pub label: &'static str,
    /// Whether a `fail` on this check blocks campaign activation.
    pub critical: bool,
}

const REGISTRY: &[CheckDefinition] = &[
    CheckDefinition {
        id: CheckId::A2pRegistration,
        label: "A2P registration",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::SmsPhoneNumber,
        label: "SMS-capable phone number",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::PhoneNumbers,
        label: "Phone numbers",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::LeadsAssigned,
        label: "Leads assigned",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::AiAgent,
        label: "AI agent",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::AgentPhone,
        label: "Agent phone number",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::CallerIdRetell,
        label: "Caller ID in Retell",
        critical: false,
    },
    CheckDefinition {
        id: CheckId::WaitStepsConfig,
        label: "Wait step configuration",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::AiSmsSettings,
        label: "AI SMS settings",
        critical: false,
    },
    CheckDefinition {
        id: CheckId::CampaignSmsNumber,
        label: "Campaign SMS number",
        critical: true,
    },
    CheckDefinition {
        id: CheckId::Webhook,
        label: "Call webhook",
        critical: false,
    },
];

/// Definition of the synthetic "campaign not found" check.
pub const CAMPAIGN_NOT_FOUND: CheckDefinition = CheckDefinition {
    id: CheckId::CampaignNotFound,
    label: "Campaign",
    critical: true,
};

/// All registered checks in evaluation (and display) order.
pub fn registry() -> &'static [CheckDefinition] {
    REGISTRY
}

/// Look up the definition for a check id, including the synthetic ones.
pub fn definition(id: CheckId) -> CheckDefinition {
    let index = match id {
        CheckId::A2pRegistration => 0,
        CheckId::SmsPhoneNumber => 1,
        CheckId::PhoneNumbers => 2,
        CheckId::LeadsAssigned => 3,
        CheckId::AiAgent => 4,
        CheckId::AgentPhone => 5,
        CheckId::CallerIdRetell => 6,
        CheckId::WaitStepsConfig => 7,
        CheckId::AiSmsSettings => 8,
        CheckId::CampaignSmsNumber => 9,
        CheckId::Webhook => 10,
        CheckId::CampaignNotFound => return CAMPAIGN_NOT_FOUND,
    };
    REGISTRY[index]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
