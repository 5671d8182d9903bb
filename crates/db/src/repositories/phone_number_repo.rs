//! Repository for the `phone_numbers` table.

use sqlx::PgPool;

use super::CAMPAIGN_ACCOUNT;

/// Provides phone number inventory for the account owning a campaign.
pub struct PhoneNumberRepo;

impl PhoneNumberRepo {
    /// Returns `(active, active_and_sms_capable)` for the campaign's account.
    pub async fn inventory_for_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<(i64, i64), sqlx::Error> {
        let query = format!(
            "SELECT
                COUNT(*) FILTER (WHERE active) AS active,
                COUNT(*) FILTER (WHERE active AND sms_capable) AS sms_capable
             FROM phone_numbers
             WHERE account_id = {CAMPAIGN_ACCOUNT}"
        );
        sqlx::query_as(&query)
            .bind(campaign_id)
            .fetch_one(pool)
            .await
    }
}
