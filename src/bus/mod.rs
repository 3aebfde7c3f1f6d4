//! Notification bus
//!
//! Topic-keyed publish/subscribe for change events. Delivery is live only:
//! a subscriber sees events published after it subscribed, never earlier ones.
//!
//! # Design
//!
//! Each subscriber owns an unbounded queue, so `publish` never waits on a
//! slow consumer. A subscriber is unregistered when its [`Subscription`] is
//! dropped (the serving layer drops it when the connection goes away).
//! Queues whose receiver is already gone are pruned on the next publish.

mod subscription;
mod topic;

pub use subscription::Subscription;
pub use topic::Topic;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use crate::types::ChangeEvent;

struct Listener {
    id: u64,
    tx: mpsc::UnboundedSender<ChangeEvent>,
}

/// Registered listeners per topic
#[derive(Default)]
pub(crate) struct Registry {
    listeners: Mutex<HashMap<Topic, Vec<Listener>>>,
    next_id: AtomicU64,
}

impl Registry {
    pub(crate) fn unregister(&self, topic: &Topic, id: u64) {
        let mut listeners = self.listeners.lock();
        if let Some(subs) = listeners.get_mut(topic) {
            subs.retain(|l| l.id != id);
            if subs.is_empty() {
                listeners.remove(topic);
            }
        }
        debug!(%topic, subscriber = id, "subscriber removed");
    }
}

/// Cloneable handle to a shared listener registry
#[derive(Clone, Default)]
pub struct NotificationBus {
    registry: Arc<Registry>,
    published: Arc<AtomicU64>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand `event` to every current subscriber of `topic`.
    ///
    /// Returns the number of subscribers it was queued for.
    pub fn publish(&self, topic: &Topic, event: ChangeEvent) -> usize {
        self.published.fetch_add(1, Ordering::SeqCst);

        let mut listeners = self.registry.listeners.lock();
        let Some(subs) = listeners.get_mut(topic) else {
            return 0;
        };

        subs.retain(|l| l.tx.send(event.clone()).is_ok());
        let delivered = subs.len();
        if subs.is_empty() {
            listeners.remove(topic);
        }

        debug!(
            %topic,
            mutation = %event.mutation,
            entity = event.entity_id(),
            delivered,
            "event published"
        );
        delivered
    }

    /// Register a new listener on `topic`
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::unbounded_channel();

        self.registry
            .listeners
            .lock()
            .entry(topic.clone())
            .or_default()
            .push(Listener { id, tx });

        debug!(%topic, subscriber = id, "subscriber added");
        Subscription::new(id, topic, rx, Arc::downgrade(&self.registry))
    }

    /// Number of live subscribers on `topic`
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.registry
            .listeners
            .lock()
            .get(topic)
            .map(|subs| subs.iter().filter(|l| !l.tx.is_closed()).count())
            .unwrap_or(0)
    }

    /// Total number of publish calls since start
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::SeqCst)
    }
}
