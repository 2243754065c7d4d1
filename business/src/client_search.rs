//! Latest-only server-side client search.
//!
//! Every client list request goes through here, the unfiltered one included
//! (empty term). Each new request cancels the one in flight. Results that
//! still arrive for an older request are dropped in [`ClientSearch::poll`],
//! so a slow response can never overwrite a newer one.

use std::any::TypeId;

use flume::{Receiver, Sender};
use log::{debug, info};
use pyme_states::{TaskId, TaskSlot};

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::Client;

/// Accepted result of one search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub term: String,
    pub result: ApiResult<Vec<Client>>,
}

#[derive(Debug)]
struct TaggedOutcome {
    id: TaskId,
    outcome: SearchOutcome,
}

#[derive(Debug)]
pub struct ClientSearch {
    api: ApiClient,
    slot: TaskSlot,
    sender: Sender<TaggedOutcome>,
    receiver: Receiver<TaggedOutcome>,
}

impl ClientSearch {
    pub fn new(api: ApiClient) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            api,
            slot: TaskSlot::new(TypeId::of::<Self>()),
            sender,
            receiver,
        }
    }

    /// Start searching for `term`, superseding any request in flight.
    /// An empty term fetches the full list.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn search(&mut self, term: impl Into<String>) -> TaskId {
        let term = term.into();
        let handle = self.slot.begin();
        let id = handle.id();
        let token = handle.cancellation_token();
        let api = self.api.clone();
        let sender = self.sender.clone();

        info!("Searching clients for {term:?} (generation {})", id.generation());
        let query = term.clone();
        let request = async move { api.list_clients(Some(&query)).await };
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Client search for {term:?} cancelled");
                }
                result = request => {
                    let outcome = SearchOutcome { term, result };
                    // The receiver is gone when the page was dropped.
                    let _ = sender.send(TaggedOutcome { id, outcome });
                }
            }
        });

        id
    }

    /// Drain finished searches. Returns the current one if it arrived.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let mut latest = None;
        while let Ok(tagged) = self.receiver.try_recv() {
            if self.slot.finish(tagged.id) {
                latest = Some(tagged.outcome);
            } else {
                debug!("Ignoring stale results for {:?}", tagged.outcome.term);
            }
        }
        latest
    }

    pub fn in_flight(&self) -> bool {
        self.slot.in_flight()
    }
}
