//! Repository for the `agents` table.

use sqlx::PgPool;

use crate::models::agent::Agent;

const COLUMNS: &str =
    "id, name, phone_number, caller_id_imported, webhook_url, created_at, updated_at";

/// Provides data access for mirrored voice agents.
pub struct AgentRepo;

impl AgentRepo {
    /// Find an agent by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Agent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agents WHERE id = $1");
        sqlx::query_as::<_, Agent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
