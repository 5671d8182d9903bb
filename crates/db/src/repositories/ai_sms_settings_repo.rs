//! Repository for the `campaign_ai_sms_settings` table.

use sqlx::PgPool;

/// Provides per-campaign AI SMS reply settings.
pub struct AiSmsSettingsRepo;

impl AiSmsSettingsRepo {
    /// Returns `(enabled, prompt)` when the campaign has settings saved.
    pub async fn find_by_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<Option<(bool, Option<String>)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT enabled, prompt FROM campaign_ai_sms_settings
             WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_optional(pool)
        .await
    }
}
