//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod a2p_registration_repo;
pub mod agent_repo;
pub mod ai_sms_settings_repo;
pub mod campaign_repo;
pub mod lead_repo;
pub mod phone_number_repo;
pub mod workflow_step_repo;

pub use a2p_registration_repo::A2pRegistrationRepo;
pub use agent_repo::AgentRepo;
pub use ai_sms_settings_repo::AiSmsSettingsRepo;
pub use campaign_repo::CampaignRepo;
pub use lead_repo::LeadRepo;
pub use phone_number_repo::PhoneNumberRepo;
pub use workflow_step_repo::WorkflowStepRepo;

/// Subquery resolving a campaign id (`$1`) to its owning account.
const CAMPAIGN_ACCOUNT: &str = "(SELECT account_id FROM campaigns WHERE id = $1)";
