//! Per-check classifiers -- pure logic, no I/O.
//!
//! Each function turns already-fetched facts into a [`Verdict`]. The
//! executor owns fetching and error isolation; nothing here can fail.

use super::check::CheckStatus;
use super::policy::ReadinessPolicy;
use super::sources::{
    A2pStatus, AgentLinkage, AiSmsSettings, CampaignSnapshot, LeadCounts, PhoneInventory,
    StepKind, WorkflowStep,
};

/// Status and message for one check, before registry metadata is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: CheckStatus,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Telephony
// ---------------------------------------------------------------------------

pub fn classify_a2p(status: A2pStatus, policy: &ReadinessPolicy) -> Verdict {
    match status {
        A2pStatus::Approved => Verdict::pass("A2P registration approved"),
        A2pStatus::Pending if policy.allow_pending_a2p => {
            Verdict::warning("A2P registration is pending carrier approval")
        }
        A2pStatus::Pending => Verdict::fail("A2P registration is pending carrier approval"),
        A2pStatus::NotStarted => Verdict::fail("A2P registration has not been submitted"),
        A2pStatus::Rejected => Verdict::fail("A2P registration was rejected by the carrier"),
    }
}

pub fn classify_sms_phone_number(inventory: &PhoneInventory) -> Verdict {
    match inventory.sms_capable_numbers {
        0 => Verdict::fail("No SMS-capable phone number on the account"),
        1 => Verdict::pass("1 SMS-capable phone number available"),
        n => Verdict::pass(format!("{n} SMS-capable phone numbers available")),
    }
}

pub fn classify_phone_numbers(inventory: &PhoneInventory) -> Verdict {
    match inventory.active_numbers {
        0 => Verdict::fail("No active phone numbers on the account"),
        1 => Verdict::pass("1 active phone number"),
        n => Verdict::pass(format!("{n} active phone numbers")),
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

pub fn classify_leads(counts: &LeadCounts, policy: &ReadinessPolicy) -> Verdict {
    if counts.assigned == 0 {
        return Verdict::fail("No leads assigned to this campaign");
    }
    if counts.callable == 0 {
        return Verdict::fail(format!(
            "None of the {} assigned leads can be called",
            counts.assigned
        ));
    }
    if counts.assigned < policy.low_lead_threshold {
        return Verdict::warning(format!(
            "Only {} leads assigned (recommended at least {})",
            counts.assigned, policy.low_lead_threshold
        ));
    }
    Verdict::pass(format!(
        "{} leads assigned, {} callable",
        counts.assigned, counts.callable
    ))
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// `linkage` is `None` when the campaign has no agent assigned.
pub fn classify_ai_agent(linkage: Option<&AgentLinkage>) -> Verdict {
    match linkage {
        None => Verdict::fail("No AI agent assigned to this campaign"),
        Some(l) if !l.agent_exists => {
            Verdict::fail("The assigned AI agent no longer exists")
        }
        Some(_) => Verdict::pass("AI agent assigned"),
    }
}

pub fn classify_agent_phone(linkage: Option<&AgentLinkage>) -> Verdict {
    match linkage {
        None => Verdict::fail("Assign an AI agent before linking a phone number"),
        Some(l) if !l.agent_exists => {
            Verdict::fail("The assigned AI agent no longer exists")
        }
        Some(AgentLinkage {
            phone_number: None, ..
        }) => Verdict::fail("AI agent has no phone number linked"),
        Some(AgentLinkage {
            phone_number: Some(number),
            ..
        }) => Verdict::pass(format!("AI agent calls from {number}")),
    }
}

pub fn classify_caller_id(linkage: Option<&AgentLinkage>) -> Verdict {
    match linkage {
        Some(AgentLinkage {
            agent_exists: true,
            phone_number: Some(number),
            caller_id_imported,
            ..
        }) => {
            if *caller_id_imported {
                Verdict::pass(format!("{number} is imported into Retell"))
            } else {
                Verdict::warning(format!("{number} is not imported into Retell as a caller ID"))
            }
        }
        _ => Verdict::warning("No agent phone number to import into Retell"),
    }
}

pub fn classify_webhook(linkage: Option<&AgentLinkage>) -> Verdict {
    let url = match linkage.and_then(|l| l.webhook_url.as_deref()) {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Verdict::warning("No call webhook configured; call outcomes will not sync"),
    };
    if url.starts_with("https://") {
        Verdict::pass("Call webhook configured")
    } else {
        Verdict::warning("Call webhook does not use HTTPS")
    }
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// `steps` is `None` when the campaign has no workflow attached.
pub fn classify_wait_steps(steps: Option<&[WorkflowStep]>, policy: &ReadinessPolicy) -> Verdict {
    let Some(steps) = steps else {
        return Verdict::warning("No workflow attached to this campaign");
    };

    let waits: Vec<&WorkflowStep> = steps.iter().filter(|s| s.kind == StepKind::Wait).collect();
    if waits.is_empty() {
        return Verdict::pass("Workflow has no wait steps");
    }

    let unset: Vec<u32> = waits
        .iter()
        .filter(|s| s.wait_minutes.unwrap_or(0) == 0)
        .map(|s| s.position)
        .collect();
    if !unset.is_empty() {
        return Verdict::fail(format!(
            "Wait steps without a delay at position(s) {}",
            join_positions(&unset)
        ));
    }

    let short: Vec<u32> = waits
        .iter()
        .filter(|s| s.wait_minutes.unwrap_or(0) < policy.min_wait_minutes)
        .map(|s| s.position)
        .collect();
    if !short.is_empty() {
        return Verdict::warning(format!(
            "Wait steps shorter than {} minutes at position(s) {}",
            policy.min_wait_minutes,
            join_positions(&short)
        ));
    }

    match waits.len() {
        1 => Verdict::pass("1 wait step configured"),
        n => Verdict::pass(format!("{n} wait steps configured")),
    }
}

pub fn classify_campaign_sms_number(
    campaign: &CampaignSnapshot,
    steps: Option<&[WorkflowStep]>,
) -> Verdict {
    let sends_sms = steps.is_some_and(|steps| steps.iter().any(|s| s.kind.sends_sms()));
    if !sends_sms {
        return Verdict::pass("Campaign does not send SMS");
    }
    match campaign.sms_from_number.as_deref() {
        Some(number) if !number.trim().is_empty() => {
            Verdict::pass(format!("SMS sent from {number}"))
        }
        _ => Verdict::fail("Workflow sends SMS but the campaign has no SMS number"),
    }
}

pub fn classify_ai_sms_settings(settings: Option<&AiSmsSettings>) -> Verdict {
    match settings {
        None => Verdict::warning("AI SMS settings are not configured"),
        Some(s) if !s.enabled => Verdict::pass("AI SMS replies are disabled"),
        Some(s) if !s.prompt_configured => {
            Verdict::warning("AI SMS replies are enabled without a prompt")
        }
        Some(_) => Verdict::pass("AI SMS settings configured"),
    }
}

fn join_positions(positions: &[u32]) -> String {
    positions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
