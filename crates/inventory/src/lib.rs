//! Perishable inventory domain module.
//!
//! Lots are held in ascending expiration order and consumed soonest-expiring
//! first. This crate is deterministic domain logic (no IO, no storage): the
//! current date is always passed in, and every user-facing effect is published
//! as an [`InventoryEvent`].

pub mod event;
pub mod inventory;
pub mod item;

pub use event::InventoryEvent;
pub use inventory::{DEFAULT_WINDOW_DAYS, ExpiryNotice, Inventory, ListedItem, Sale};
pub use item::Item;
