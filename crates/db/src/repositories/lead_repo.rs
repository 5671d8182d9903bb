//! Repository for lead assignments (`campaign_leads` joined with `leads`).

use sqlx::PgPool;

/// Provides lead counts per campaign.
pub struct LeadRepo;

impl LeadRepo {
    /// Count leads assigned to a campaign.
    ///
    /// Returns `(assigned, callable)`, where callable excludes leads without a
    /// phone number and leads flagged do-not-call.
    pub async fn counts_for_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT
                COUNT(*) AS assigned,
                COUNT(*) FILTER (
                    WHERE NOT l.do_not_call
                      AND l.phone_number IS NOT NULL
                      AND l.phone_number <> ''
                ) AS callable
             FROM campaign_leads cl
             JOIN leads l ON l.id = cl.lead_id
             WHERE cl.campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(pool)
        .await
    }
}
