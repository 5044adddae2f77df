//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is the notification side channel of the domain: operations publish
//! what happened, subscribers render or assert on it.
//!
//! - **Ordered per publisher**: a subscriber sees one publisher's events in
//!   publish order.
//! - **Fire-and-forget**: publishing never blocks on a subscriber.
//! - **No persistence**: events that nobody subscribed to are dropped.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every event published after it was
/// created (broadcast semantics).
///
/// ```ignore
/// let bus = InMemoryEventBus::new();
/// let subscription = bus.subscribe();
/// bus.publish(event)?;
/// for event in subscription.drain() {
///     println!("{event}");
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Collect every message already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. internal lock poisoning). Callers that treat
/// notifications as fire-and-forget log the failure and move on.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
