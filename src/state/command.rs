// Delete command state.
// Tracks the delete operation's status independently of the listings read.

use crate::error::ViewError;

use super::status::OperationStatus;

/// Status of the delete mutation.
///
/// A single status covers every row. It follows the most recent invocation:
/// completions of superseded invocations still report success to the caller
/// (so their refetch is issued) but do not change the visible status.
#[derive(Debug, Clone, Default)]
pub struct DeleteCommand {
    status: OperationStatus,
    /// Target of the latest invocation.
    target: Option<String>,
    latest: Option<u64>,
    next_seq: u64,
}

impl DeleteCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an invocation against `id`. Clears any previous failure.
    pub fn begin(&mut self, id: &str) -> u64 {
        self.next_seq += 1;
        self.latest = Some(self.next_seq);
        self.target = Some(id.to_string());
        self.status = OperationStatus::Pending;
        self.next_seq
    }

    /// Record a completed invocation. Returns true when the delete succeeded.
    pub fn complete(&mut self, seq: u64, id: &str, result: Result<(), String>) -> bool {
        let succeeded = result.is_ok();

        if self.latest != Some(seq) {
            tracing::debug!(seq, %id, succeeded, "superseded delete completed");
            return succeeded;
        }

        self.status = match result {
            Ok(()) => OperationStatus::Succeeded,
            Err(reason) => OperationStatus::Failed(reason),
        };
        succeeded
    }

    pub fn status(&self) -> &OperationStatus {
        &self.status
    }

    /// Failure of the latest invocation.
    pub fn error(&self) -> Option<ViewError> {
        let reason = self.status.failure()?;
        Some(ViewError::Delete {
            id: self.target.clone().unwrap_or_default(),
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_lifecycle() {
        let mut delete = DeleteCommand::new();
        assert_eq!(delete.status(), &OperationStatus::Idle);

        let seq = delete.begin("1");
        assert!(delete.status().is_pending());

        assert!(delete.complete(seq, "1", Ok(())));
        assert_eq!(delete.status(), &OperationStatus::Succeeded);
        assert!(delete.error().is_none());
    }

    #[test]
    fn test_failure_records_delete_error() {
        let mut delete = DeleteCommand::new();
        let seq = delete.begin("2");

        assert!(!delete.complete(seq, "2", Err("transport error".into())));
        assert!(!delete.status().is_pending());
        assert_eq!(
            delete.error(),
            Some(ViewError::Delete {
                id: "2".into(),
                reason: "transport error".into()
            })
        );
    }

    #[test]
    fn test_new_invocation_clears_failure() {
        let mut delete = DeleteCommand::new();
        let seq = delete.begin("2");
        delete.complete(seq, "2", Err("boom".into()));

        delete.begin("2");
        assert!(delete.error().is_none());
        assert!(delete.status().is_pending());
    }

    #[test]
    fn test_superseded_completion_leaves_status() {
        let mut delete = DeleteCommand::new();
        let first = delete.begin("a");
        let second = delete.begin("b");

        // Older invocation still reports its own result.
        assert!(!delete.complete(first, "a", Err("boom".into())));
        assert!(delete.status().is_pending());
        assert!(delete.error().is_none());

        assert!(delete.complete(second, "b", Ok(())));
        assert_eq!(delete.status(), &OperationStatus::Succeeded);
    }
}
