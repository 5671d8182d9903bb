//! Workflow step model.

use readiness_core::readiness::sources::{StepKind, WorkflowStep};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `workflow_steps` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WorkflowStepRow {
    pub id: i64,
    pub workflow_id: String,
    pub position: i32,
    pub step_type: String,
    pub wait_minutes: Option<i32>,
}

impl WorkflowStepRow {
    pub fn into_step(self) -> Result<WorkflowStep, String> {
        let kind = StepKind::from_str_value(&self.step_type)?;
        Ok(WorkflowStep {
            position: u32::try_from(self.position).unwrap_or(0),
            kind,
            // The schema rejects negative delays.
            wait_minutes: self.wait_minutes.map(|m| u32::try_from(m).unwrap_or(0)),
        })
    }
}
