//! Notification events and the bus that carries them.
//!
//! Domain operations describe what they did as typed events; the bus fans
//! those events out to whoever subscribed (console printers, tests, loggers).

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
