//! Repository for the `a2p_registrations` table.

use sqlx::PgPool;

use super::CAMPAIGN_ACCOUNT;

/// Provides A2P registration state for the account owning a campaign.
pub struct A2pRegistrationRepo;

impl A2pRegistrationRepo {
    /// Most recent registration status, or `None` if the account never
    /// submitted one.
    pub async fn latest_status_for_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let query = format!(
            "SELECT status FROM a2p_registrations
             WHERE account_id = {CAMPAIGN_ACCOUNT}
             ORDER BY updated_at DESC, id DESC
             LIMIT 1"
        );
        let row: Option<(String,)> = sqlx::query_as(&query)
            .bind(campaign_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(status,)| status))
    }
}
