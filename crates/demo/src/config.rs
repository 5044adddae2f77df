//! Demo configuration, read from the environment.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use perishable_core::{Clock, FixedClock, SystemClock, parse_iso_date};
use perishable_inventory::DEFAULT_WINDOW_DAYS;

pub const TODAY_ENV: &str = "PERISHABLE_TODAY";
pub const WINDOW_DAYS_ENV: &str = "PERISHABLE_WINDOW_DAYS";
pub const OUTPUT_ENV: &str = "PERISHABLE_OUTPUT";

/// How notifications are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Pinned "today"; `None` reads the wall clock.
    pub today: Option<NaiveDate>,
    pub window_days: u32,
    pub output: Output,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let today = lookup(TODAY_ENV)
            .map(|raw| parse_iso_date(&raw).with_context(|| format!("{TODAY_ENV}={raw}")))
            .transpose()?;

        let window_days = match lookup(WINDOW_DAYS_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{WINDOW_DAYS_ENV} must be a day count, got {raw:?}"))?,
            None => DEFAULT_WINDOW_DAYS,
        };

        let output = match lookup(OUTPUT_ENV).as_deref().map(str::trim) {
            None | Some("") | Some("text") => Output::Text,
            Some("json") => Output::Json,
            Some(other) => anyhow::bail!("{OUTPUT_ENV} must be `text` or `json`, got {other:?}"),
        };

        Ok(Self {
            today,
            window_days,
            output,
        })
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<DemoConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_wall_clock_and_seven_day_window() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.today, None);
        assert_eq!(cfg.window_days, 7);
        assert_eq!(cfg.output, Output::Text);
    }

    #[test]
    fn pinned_date_drives_the_clock() {
        let cfg = config(&[(TODAY_ENV, "2025-03-18"), (WINDOW_DAYS_ENV, "3")]).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
        assert_eq!(cfg.today, Some(date));
        assert_eq!(cfg.clock().today(), date);
        assert_eq!(cfg.window_days, 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[(TODAY_ENV, "18/03/2025")]).is_err());
        assert!(config(&[(WINDOW_DAYS_ENV, "-1")]).is_err());
        assert!(config(&[(OUTPUT_ENV, "xml")]).is_err());
    }
}
