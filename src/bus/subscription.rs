//! Subscriber side of the notification bus

use std::pin::Pin;
use std::sync::Weak;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::{Registry, Topic};
use crate::types::ChangeEvent;

/// Live, unbounded sequence of events for one topic.
///
/// The sequence only ends when the bus itself is gone. Dropping the
/// subscription unregisters it.
pub struct Subscription {
    id: u64,
    topic: Topic,
    events: UnboundedReceiverStream<ChangeEvent>,
    registry: Weak<Registry>,
}

impl Subscription {
    pub(crate) fn new(
        id: u64,
        topic: Topic,
        rx: mpsc::UnboundedReceiver<ChangeEvent>,
        registry: Weak<Registry>,
    ) -> Self {
        Self {
            id,
            topic,
            events: UnboundedReceiverStream::new(rx),
            registry,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Wait for the next event
    pub async fn next_event(&mut self) -> Option<ChangeEvent> {
        self.events.as_mut().recv().await
    }

    /// Take an already-queued event without waiting
    pub fn try_next(&mut self) -> Option<ChangeEvent> {
        self.events.as_mut().try_recv().ok()
    }
}

impl Stream for Subscription {
    type Item = ChangeEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().events).poll_next(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(&self.topic, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}
