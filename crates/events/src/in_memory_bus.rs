//! In-memory event bus.

use std::sync::{Mutex, MutexGuard, PoisonError, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Fan-out to every live subscriber, in publish order
/// - Publishing with no subscribers succeeds and drops the message
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered subscribers; dropped ones are pruned on publish.
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    /// Subscribing only ever pushes a sender, so a poisoned list is still
    /// consistent and can be recovered.
    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<mpsc::Sender<M>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        let Some((last, rest)) = subs.split_last() else {
            return Ok(());
        };
        let mut live: Vec<bool> = rest
            .iter()
            .map(|tx| tx.send(message.clone()).is_ok())
            .collect();
        // The final subscriber takes the message itself instead of a clone.
        live.push(last.send(message).is_ok());

        let mut alive = live.into_iter();
        subs.retain(|_| alive.next().unwrap_or(false));
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        self.lock_subscribers().push(tx);
        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_sees_messages_in_publish_order() {
        let bus = InMemoryEventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish("a").unwrap();
        bus.publish("b").unwrap();

        assert_eq!(first.drain(), vec!["a", "b"]);
        assert_eq!(second.drain(), vec!["a", "b"]);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus: InMemoryEventBus<u32> = InMemoryEventBus::new();
        bus.publish(1).unwrap();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let bus = InMemoryEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(42).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), 42);
    }

    #[test]
    fn dead_subscriber_in_the_middle_is_pruned_and_others_still_receive() {
        let bus = InMemoryEventBus::new();
        let first = bus.subscribe();
        drop(bus.subscribe());
        let last = bus.subscribe();

        bus.publish(String::from("stock")).unwrap();

        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(first.drain(), vec!["stock".to_string()]);
        assert_eq!(last.drain(), vec!["stock".to_string()]);
    }

    #[test]
    fn subscription_only_sees_later_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish("before").unwrap();
        let sub = bus.subscribe();
        bus.publish("after").unwrap();
        assert_eq!(sub.drain(), vec!["after"]);
    }
}
