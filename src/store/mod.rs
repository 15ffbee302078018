//! Canonical state store for module and logger data.
//!
//! The [`Store`] is the single owner of the last-known server state. Views
//! read [`Snapshot`]s and never mutate them; changes go through
//! [`Store::dispatch`] with a [`Transition`], which applies the pure
//! [`reduce`] function and publishes the result to subscribers.

pub mod reducer;
pub mod snapshot;

pub use reducer::{reduce, Transition};
pub use snapshot::{ResolvedDependency, Snapshot};

use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::client::{ClientError, MaintenanceClient};

/// Owner of the current snapshot and the client it configures.
pub struct Store {
    snapshot: Arc<Snapshot>,
    client: Arc<dyn MaintenanceClient>,
    subscribers: Vec<mpsc::UnboundedSender<Arc<Snapshot>>>,
}

impl Store {
    /// Create a store whose endpoint mirrors the client's current one.
    pub fn new(client: Arc<dyn MaintenanceClient>) -> Self {
        let snapshot = Arc::new(Snapshot::new(client.endpoint()));
        Self {
            snapshot,
            client,
            subscribers: Vec::new(),
        }
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Client configured by this store.
    #[must_use]
    pub fn client(&self) -> Arc<dyn MaintenanceClient> {
        Arc::clone(&self.client)
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Arc<Snapshot>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Apply a transition and publish the resulting snapshot.
    ///
    /// `SetEndpoint` reconfigures the client before the new snapshot is
    /// produced, and records the endpoint in the client's normalized form.
    ///
    /// # Errors
    /// Returns the client's error if it rejects a new endpoint; the current
    /// snapshot is left as it was.
    pub fn dispatch(&mut self, transition: Transition) -> Result<Arc<Snapshot>, ClientError> {
        let transition = match transition {
            Transition::SetEndpoint(url) => {
                self.client.update_endpoint(&url)?;
                let endpoint = self.client.endpoint();
                info!("Store: endpoint changed to {}", endpoint);
                Transition::SetEndpoint(endpoint)
            }
            other => other,
        };

        let next = Arc::new(reduce(&self.snapshot, transition));
        self.snapshot = Arc::clone(&next);
        self.publish();
        Ok(next)
    }

    fn publish(&mut self) {
        let snapshot = &self.snapshot;
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.send(Arc::clone(snapshot)).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!("Store: dropped {} closed subscribers", dropped);
        }
    }
}
