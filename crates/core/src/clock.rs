//! Calendar clock abstraction.
//!
//! Expiry rules work at day granularity, so the clock hands out a
//! [`NaiveDate`] rather than an instant. Production code reads the local wall
//! clock; tests pin the date with [`FixedClock`].

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on a single calendar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::validation(format!("invalid date {s:?}: {e}")))
}
