// Operation status tracking.
// One status per independent operation; read and delete never share a flag.

/// Lifecycle of a single asynchronous operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl OperationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, OperationStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, OperationStatus::Failed(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            OperationStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
