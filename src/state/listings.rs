// Listings view state.
// Composes the listings read, the delete command, and the create-form dialog,
// and applies the resync rule: a successful delete triggers exactly one refetch.

use ratatui::widgets::ListState;

use crate::error::{Result, ViewError};
use crate::graphql::Listing;

use super::command::DeleteCommand;
use super::form::CreateForm;
use super::query::ListQuery;

/// Identifies one issued request. `mount` ties it to a view activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub mount: u64,
    pub seq: u64,
}

/// Work the view asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchListings { ticket: Ticket },
    DeleteListing { ticket: Ticket, id: String },
}

/// Completion of a request, reported back to the view.
#[derive(Debug)]
pub enum Outcome {
    Listings {
        ticket: Ticket,
        result: Result<Vec<Listing>>,
    },
    Deleted {
        ticket: Ticket,
        id: String,
        result: Result<String>,
    },
}

/// Composite phase derived from the read state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Initial read pending.
    Loading,
    /// Initial read failed; nothing to show.
    Error,
    /// A successful read is on screen.
    Ready,
}

pub const READ_ERROR_MESSAGE: &str = "Uh oh! Something went wrong - please try again later :(";
pub const DELETE_ERROR_MESSAGE: &str = "Uh oh! Something went wrong :(. Please try again later.";

/// State for the listings screen.
#[derive(Debug, Default)]
pub struct ListingsView {
    /// Activation counter; completions from earlier activations are discarded.
    mount: u64,
    active: bool,
    pub query: ListQuery,
    pub delete: DeleteCommand,
    pub form: CreateForm,
    pub list_state: ListState,
}

impl ListingsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the view and issue the initial read.
    pub fn mount(&mut self) -> Request {
        self.mount += 1;
        self.active = true;
        self.query = ListQuery::new();
        self.delete = DeleteCommand::new();
        self.form = CreateForm::new();
        self.list_state = ListState::default();

        tracing::info!(mount = self.mount, "listings view mounted");
        self.fetch()
    }

    /// Tear down and activate again, discarding anything still in flight.
    pub fn remount(&mut self) -> Request {
        self.teardown();
        self.mount()
    }

    /// Release the view. Later completions are ignored.
    pub fn teardown(&mut self) {
        if self.active {
            tracing::info!(
                mount = self.mount,
                pending_reads = self.query.in_flight(),
                "listings view torn down"
            );
        }
        self.active = false;
        self.mount += 1;
    }

    fn fetch(&mut self) -> Request {
        let seq = self.query.begin();
        Request::FetchListings {
            ticket: Ticket {
                mount: self.mount,
                seq,
            },
        }
    }

    /// Issue a delete for `id`. Only available once a list is on screen.
    pub fn request_delete(&mut self, id: &str) -> Option<Request> {
        if !self.active || self.phase() != ViewPhase::Ready {
            return None;
        }

        let seq = self.delete.begin(id);
        tracing::info!(%id, seq, "delete requested");
        Some(Request::DeleteListing {
            ticket: Ticket {
                mount: self.mount,
                seq,
            },
            id: id.to_string(),
        })
    }

    /// Issue a delete for the selected row.
    pub fn delete_selected(&mut self) -> Option<Request> {
        let id = self.selected_listing()?.id.clone();
        self.request_delete(&id)
    }

    /// The "Add" row action. It has no handler.
    pub fn add_selected(&self) {
        tracing::debug!(
            id = self.selected_listing().map(|l| l.id.as_str()),
            "add action has no handler"
        );
    }

    /// Open the create-form dialog from a row action.
    pub fn open_form(&mut self) {
        if self.phase() == ViewPhase::Ready {
            self.form.open();
        }
    }

    /// Apply a completion. Returns the follow-up request, if any.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::Listings { ticket, result } => {
                if !self.accepts(ticket) {
                    tracing::debug!(seq = ticket.seq, "discarding stale listings completion");
                    return None;
                }

                match &result {
                    Ok(listings) => {
                        tracing::info!(seq = ticket.seq, count = listings.len(), "listings loaded")
                    }
                    Err(e) => tracing::warn!(seq = ticket.seq, error = %e, "listings read failed"),
                }
                self.query.complete(result.map_err(|e| e.to_string()));
                self.clamp_selection();
                None
            }
            Outcome::Deleted { ticket, id, result } => {
                if !self.accepts(ticket) {
                    tracing::debug!(seq = ticket.seq, %id, "discarding stale delete completion");
                    return None;
                }

                let succeeded = match result {
                    Ok(_) => {
                        tracing::info!(%id, seq = ticket.seq, "listing deleted");
                        self.delete.complete(ticket.seq, &id, Ok(()))
                    }
                    Err(e) => {
                        tracing::warn!(%id, seq = ticket.seq, error = %e, "delete failed");
                        self.delete.complete(ticket.seq, &id, Err(e.to_string()))
                    }
                };
                if let Some(err) = self.delete.error() {
                    tracing::warn!(error = %err, "delete error banner shown");
                }

                // Resync only after the delete is observed successful.
                succeeded.then(|| self.fetch())
            }
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        self.active && ticket.mount == self.mount
    }

    pub fn phase(&self) -> ViewPhase {
        if self.query.data().is_some() {
            ViewPhase::Ready
        } else if self.query.status().is_failed()
            && matches!(self.query.error(), Some(ViewError::Read(_)))
        {
            ViewPhase::Error
        } else {
            ViewPhase::Loading
        }
    }

    /// Listings to display; `None` until a read has succeeded.
    pub fn listings(&self) -> Option<&[Listing]> {
        self.query.data()
    }

    /// Delete-failure banner text, shown only while the latest delete has failed.
    pub fn banner(&self) -> Option<&'static str> {
        self.delete.error().map(|_| DELETE_ERROR_MESSAGE)
    }

    /// Whether the list is covered by the busy overlay.
    pub fn is_busy(&self) -> bool {
        self.phase() == ViewPhase::Ready && (self.delete.status().is_pending() || self.query.status().is_pending())
    }

    /// A failed post-delete refresh; prior data stays on screen.
    pub fn refetch_error(&self) -> Option<&ViewError> {
        self.query
            .error()
            .filter(|e| matches!(e, ViewError::Refetch(_)))
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        let index = self.list_state.selected()?;
        self.listings()?.get(index)
    }

    pub fn select_next(&mut self) {
        let Some(len) = self.listings().map(<[Listing]>::len) else {
            return;
        };
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let Some(len) = self.listings().map(<[Listing]>::len) else {
            return;
        };
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Keep the selection inside the current collection.
    fn clamp_selection(&mut self) {
        let len = self.listings().map_or(0, <[Listing]>::len);
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }
}
