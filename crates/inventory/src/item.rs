use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use perishable_core::{DomainResult, parse_iso_date};

/// Day-first display format used in item descriptions.
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// One stocked lot of a product.
///
/// Codes are not unique: two lots may share a code and differ only in their
/// expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    code: String,
    quantity: u32,
    expiration_date: NaiveDate,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        quantity: u32,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            quantity,
            expiration_date,
        }
    }

    /// Build an item from an ISO-8601 (`YYYY-MM-DD`) expiration date.
    pub fn parse(
        name: impl Into<String>,
        code: impl Into<String>,
        quantity: u32,
        expiration_date: &str,
    ) -> DomainResult<Self> {
        let expiration_date = parse_iso_date(expiration_date)?;
        Ok(Self::new(name, code, quantity, expiration_date))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// Whole calendar days from `today` to the expiration date.
    ///
    /// Negative once the lot has expired; zero on the expiration day itself.
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        self.expiration_date.signed_duration_since(today).num_days()
    }

    /// Expired means expiring on or before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date <= today
    }

    /// Expires strictly after `today` and at most `window_days` ahead.
    pub fn expires_within(&self, today: NaiveDate, window_days: u32) -> bool {
        let days = self.days_until_expiration(today);
        days > 0 && days <= i64::from(window_days)
    }

    /// Human-readable one-line description.
    pub fn describe(&self, today: NaiveDate) -> String {
        format!(
            "Item: {} | Code: {} | Quantity: {} | Expires: {} | Days until expiry: {}",
            self.name,
            self.code,
            self.quantity,
            self.expiration_date.format(DISPLAY_DATE_FORMAT),
            self.days_until_expiration(today),
        )
    }

    /// Callers must ensure `by < quantity`; a sale that consumes the whole lot
    /// removes it instead.
    pub(crate) fn reduce_quantity(&mut self, by: u32) {
        self.quantity -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perishable_core::DomainError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk() -> Item {
        Item::new("Milk", "L001", 50, date(2025, 4, 15))
    }

    #[test]
    fn parse_accepts_iso_dates() {
        let item = Item::parse("Milk", "L001", 50, "2025-04-15").unwrap();
        assert_eq!(item, milk());
    }

    #[test]
    fn parse_rejects_malformed_dates() {
        let err = Item::parse("Milk", "L001", 50, "15/04/2025").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for malformed date"),
        }
    }

    #[test]
    fn days_until_expiration_counts_calendar_days() {
        let item = milk();
        assert_eq!(item.days_until_expiration(date(2025, 4, 8)), 7);
        assert_eq!(item.days_until_expiration(date(2025, 4, 15)), 0);
        assert_eq!(item.days_until_expiration(date(2025, 4, 20)), -5);
        // Across a month boundary.
        assert_eq!(item.days_until_expiration(date(2025, 3, 31)), 15);
    }

    #[test]
    fn expiration_day_counts_as_expired() {
        let item = milk();
        assert!(!item.is_expired_on(date(2025, 4, 14)));
        assert!(item.is_expired_on(date(2025, 4, 15)));
        assert!(item.is_expired_on(date(2025, 4, 16)));
    }

    #[test]
    fn expires_within_excludes_today_and_includes_window_edge() {
        let item = milk();
        assert!(!item.expires_within(date(2025, 4, 15), 7));
        assert!(item.expires_within(date(2025, 4, 14), 7));
        assert!(item.expires_within(date(2025, 4, 8), 7));
        assert!(!item.expires_within(date(2025, 4, 7), 7));
    }

    #[test]
    fn describe_renders_all_fields() {
        let line = milk().describe(date(2025, 4, 10));
        assert_eq!(
            line,
            "Item: Milk | Code: L001 | Quantity: 50 | Expires: 15/04/2025 | Days until expiry: 5"
        );
    }

    #[test]
    fn serializes_expiration_as_iso_date() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(json["expiration_date"], "2025-04-15");
        assert_eq!(json["quantity"], 50);
    }
}
