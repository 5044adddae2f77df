//! `perishable-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the calendar clock every date-sensitive operation reads.

pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock, parse_iso_date};
pub use error::{DomainError, DomainResult};
