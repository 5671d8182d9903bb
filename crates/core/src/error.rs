use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A collaborator needed before any check can run (the campaign lookup)
    /// is unreachable.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a single collaborator query.
///
/// Never surfaced to callers of the executor directly; the executor folds it
/// into the affected check's status and message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("query timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_uses_millis() {
        let err = SourceError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "query timed out after 1500ms");
    }

    #[test]
    fn not_found_display() {
        let err = CoreError::NotFound {
            entity: "Campaign",
            id: "cmp_1".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: Campaign with id cmp_1");
    }
}
