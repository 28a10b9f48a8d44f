// Listings read state.
// Owns the displayed collection and the read operation's loading/error projection.

use chrono::{DateTime, Utc};

use crate::error::ViewError;
use crate::graphql::Listing;

use super::status::OperationStatus;

/// State cell for the listings read. The only writer of the displayed collection.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Most recently succeeded read, replaced wholesale.
    data: Option<Vec<Listing>>,
    /// Outcome of the most recently completed read.
    last: OperationStatus,
    /// Failure of the most recently completed read, if it failed.
    error: Option<ViewError>,
    /// Reads issued but not yet completed.
    in_flight: usize,
    /// When `data` was last replaced.
    synced_at: Option<DateTime<Utc>>,
    next_seq: u64,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new read (initial fetch or refetch). Returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.in_flight += 1;
        self.next_seq += 1;
        self.next_seq
    }

    /// Apply a completed read. Completions apply in arrival order, so the
    /// last read to resolve determines the collection.
    pub fn complete(&mut self, result: Result<Vec<Listing>, String>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(listings) => {
                self.data = Some(listings);
                self.error = None;
                self.last = OperationStatus::Succeeded;
                self.synced_at = Some(Utc::now());
            }
            Err(reason) => {
                // Prior data is kept; only the error projection changes.
                self.error = Some(if self.data.is_some() {
                    ViewError::Refetch(reason.clone())
                } else {
                    ViewError::Read(reason.clone())
                });
                self.last = OperationStatus::Failed(reason);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn data(&self) -> Option<&[Listing]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn status(&self) -> OperationStatus {
        if self.is_loading() {
            OperationStatus::Pending
        } else {
            self.last.clone()
        }
    }

    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }
}
