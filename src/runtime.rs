// Request execution.
// Runs view requests as background tasks and reports their outcomes to the UI loop.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::graphql::Listing;
use crate::state::{Outcome, Request};

/// Backend operations the listings view depends on.
pub trait ListingsApi: Send + Sync + 'static {
    /// Read every listing, in server order.
    fn fetch_listings(&self) -> impl Future<Output = Result<Vec<Listing>>> + Send;

    /// Delete one listing and return the echoed id.
    fn delete_listing(&self, id: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Spawns a task per request; completions arrive on the paired receiver.
pub struct Dispatcher<A> {
    api: Arc<A>,
    outcomes: UnboundedSender<Outcome>,
}

impl<A: ListingsApi> Dispatcher<A> {
    pub fn new(api: A) -> (Self, UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                api: Arc::new(api),
                outcomes: tx,
            },
            rx,
        )
    }

    /// Start executing a request. Must be called inside a tokio runtime.
    pub fn dispatch(&self, request: Request) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let tx = self.outcomes.clone();

        tokio::spawn(async move {
            let outcome = match request {
                Request::FetchListings { ticket } => {
                    tracing::debug!(mount = ticket.mount, seq = ticket.seq, "fetching listings");
                    let result = api.fetch_listings().await;
                    Outcome::Listings { ticket, result }
                }
                Request::DeleteListing { ticket, id } => {
                    tracing::debug!(mount = ticket.mount, seq = ticket.seq, %id, "deleting listing");
                    let result = api.delete_listing(&id).await;
                    Outcome::Deleted { ticket, id, result }
                }
            };

            // The receiver is gone once the UI loop has exited.
            if tx.send(outcome).is_err() {
                tracing::debug!("outcome dropped after shutdown");
            }
        })
    }
}
