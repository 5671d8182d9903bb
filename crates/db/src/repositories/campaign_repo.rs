//! Repository for the `campaigns` table.

use sqlx::PgPool;

use crate::models::campaign::Campaign;

/// Column list for campaigns queries.
const COLUMNS: &str =
    "id, account_id, name, agent_id, workflow_id, sms_from_number, created_at, updated_at";

/// Provides data access for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Find a campaign by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
