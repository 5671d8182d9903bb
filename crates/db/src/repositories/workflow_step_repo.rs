//! Repository for the `workflow_steps` table.

use sqlx::PgPool;

use crate::models::workflow_step::WorkflowStepRow;

const COLUMNS: &str = "id, workflow_id, position, step_type, wait_minutes";

/// Provides data access for workflow steps.
pub struct WorkflowStepRepo;

impl WorkflowStepRepo {
    /// List the steps of a workflow in execution order.
    pub async fn list_by_workflow(
        pool: &PgPool,
        workflow_id: &str,
    ) -> Result<Vec<WorkflowStepRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workflow_steps
             WHERE workflow_id = $1
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, WorkflowStepRow>(&query)
            .bind(workflow_id)
            .fetch_all(pool)
            .await
    }
}
