//! Voice agent model (mirrored from Retell).

use readiness_core::readiness::sources::AgentLinkage;
use serde::Serialize;
use sqlx::FromRow;

use super::Timestamp;

/// A row from the `agents` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub caller_id_imported: bool,
    pub webhook_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Linkage facts for an agent row; `None` means the agent no longer exists.
pub fn linkage(agent: Option<Agent>) -> AgentLinkage {
    match agent {
        Some(agent) => AgentLinkage {
            agent_exists: true,
            phone_number: agent.phone_number.filter(|n| !n.trim().is_empty()),
            caller_id_imported: agent.caller_id_imported,
            webhook_url: agent.webhook_url,
        },
        None => AgentLinkage {
            agent_exists: false,
            phone_number: None,
            caller_id_imported: false,
            webhook_url: None,
        },
    }
}
