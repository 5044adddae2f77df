//! Inventory held in first-expiring-first-out order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use perishable_core::{DomainError, DomainResult};
use perishable_events::{Event, EventBus, InMemoryEventBus, Subscription};

use crate::event::InventoryEvent;
use crate::item::Item;

/// Look-ahead used by [`Inventory::upcoming_expirations`] when callers have no
/// preference.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One row of an inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedItem {
    /// 1-based position in expiration order.
    pub position: usize,
    pub item: Item,
    pub description: String,
}

/// One row of an expiry report.
///
/// `days` is days until expiration for upcoming lots and days since
/// expiration for expired ones; it is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryNotice {
    pub name: String,
    pub code: String,
    pub days: i64,
}

/// Outcome of a successful [`Inventory::sell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sale {
    /// The requested quantity covered the whole lot, which was removed.
    Depleted(Item),
    /// The lot stays in stock with `remaining` units.
    Partial {
        name: String,
        code: String,
        sold: u32,
        remaining: u32,
    },
}

/// Ordered collection of lots.
///
/// The held sequence is sorted ascending by expiration date whenever it is
/// observed; lots expiring on the same day keep their insertion order.
/// Every user-facing effect is published on the event bus and logged.
#[derive(Debug)]
pub struct Inventory<B = InMemoryEventBus<InventoryEvent>> {
    items: Vec<Item>,
    bus: B,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_bus(InMemoryEventBus::new())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Inventory<B>
where
    B: EventBus<InventoryEvent>,
{
    pub fn with_bus(bus: B) -> Self {
        Self {
            items: Vec::new(),
            bus,
        }
    }

    /// Subscribe to notifications emitted from now on.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units held across every lot sharing `code`.
    pub fn total_quantity(&self, code: &str) -> u64 {
        self.items
            .iter()
            .filter(|item| item.code() == code)
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Insert a lot, keeping the sequence in expiration order.
    pub fn add(&mut self, item: Item) {
        let event = InventoryEvent::ItemAdded {
            name: item.name().to_string(),
            code: item.code().to_string(),
        };
        self.items.push(item);
        // `sort_by_key` is stable: same-day lots keep insertion order.
        self.items.sort_by_key(Item::expiration_date);
        self.notify(event);
    }

    /// Snapshot of every lot in expiration order.
    pub fn list(&self, today: NaiveDate) -> Vec<ListedItem> {
        if self.items.is_empty() {
            self.notify(InventoryEvent::InventoryEmpty);
            return Vec::new();
        }

        let rows: Vec<ListedItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ListedItem {
                position: index + 1,
                item: item.clone(),
                description: item.describe(today),
            })
            .collect();

        for row in &rows {
            self.notify(InventoryEvent::ItemListed {
                position: row.position,
                description: row.description.clone(),
            });
        }
        rows
    }

    /// Remove the lot at 0-based `index`.
    pub fn remove_at(&mut self, index: usize) -> DomainResult<Item> {
        let len = self.items.len();
        if index >= len {
            self.notify(InventoryEvent::InvalidIndex { index, len });
            return Err(DomainError::invalid_index(index, len));
        }

        let removed = self.items.remove(index);
        self.notify(InventoryEvent::ItemRemoved {
            index,
            name: removed.name().to_string(),
        });
        Ok(removed)
    }

    /// Drop every lot expiring on or before `today`, returning them in
    /// expiration order.
    pub fn remove_expired(&mut self, today: NaiveDate) -> Vec<Item> {
        if !self.items.iter().any(|item| item.is_expired_on(today)) {
            self.notify(InventoryEvent::NoExpiredItems);
            return Vec::new();
        }

        let (expired, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is_expired_on(today));
        self.items = kept;

        self.notify(InventoryEvent::ExpiredItemsRemoved {
            count: expired.len(),
        });
        for item in &expired {
            self.notify(InventoryEvent::ExpiredItemRemoved {
                name: item.name().to_string(),
                code: item.code().to_string(),
            });
        }
        expired
    }

    /// Sell `quantity` units from the soonest-expiring lot with `code`.
    ///
    /// A request for at least the lot's quantity removes the lot; any excess
    /// is not carried over to later lots.
    pub fn sell(&mut self, code: &str, quantity: u32) -> DomainResult<Sale> {
        let Some(index) = self.items.iter().position(|item| item.code() == code) else {
            self.notify(InventoryEvent::ItemNotFound {
                code: code.to_string(),
            });
            return Err(DomainError::not_found(code));
        };

        if self.items[index].quantity() <= quantity {
            let lot = self.items.remove(index);
            self.notify(InventoryEvent::LotDepleted {
                name: lot.name().to_string(),
                code: lot.code().to_string(),
            });
            return Ok(Sale::Depleted(lot));
        }

        let lot = &mut self.items[index];
        lot.reduce_quantity(quantity);
        let name = lot.name().to_string();
        let code = lot.code().to_string();
        let remaining = lot.quantity();

        self.notify(InventoryEvent::LotSold {
            name: name.clone(),
            code: code.clone(),
            sold: quantity,
            remaining,
        });
        Ok(Sale::Partial {
            name,
            code,
            sold: quantity,
            remaining,
        })
    }

    /// Lots expiring after `today` and at most `window_days` ahead.
    pub fn upcoming_expirations(&self, today: NaiveDate, window_days: u32) -> Vec<ExpiryNotice> {
        let upcoming: Vec<ExpiryNotice> = self
            .items
            .iter()
            .filter(|item| item.expires_within(today, window_days))
            .map(|item| ExpiryNotice {
                name: item.name().to_string(),
                code: item.code().to_string(),
                days: item.days_until_expiration(today),
            })
            .collect();

        if upcoming.is_empty() {
            self.notify(InventoryEvent::NoUpcomingExpirations { window_days });
        }
        for notice in &upcoming {
            self.notify(InventoryEvent::UpcomingExpiration {
                name: notice.name.clone(),
                code: notice.code.clone(),
                days: notice.days,
            });
        }
        upcoming
    }

    /// Lots expiring on or before `today`, left in place.
    pub fn expired_report(&self, today: NaiveDate) -> Vec<ExpiryNotice> {
        let expired: Vec<ExpiryNotice> = self
            .items
            .iter()
            .filter(|item| item.is_expired_on(today))
            .map(|item| ExpiryNotice {
                name: item.name().to_string(),
                code: item.code().to_string(),
                days: item.days_until_expiration(today).abs(),
            })
            .collect();

        if expired.is_empty() {
            self.notify(InventoryEvent::NoExpiredItems);
        }
        for notice in &expired {
            self.notify(InventoryEvent::ExpiredItemReported {
                name: notice.name.clone(),
                code: notice.code.clone(),
                days_expired: notice.days,
            });
        }
        expired
    }

    fn notify(&self, event: InventoryEvent) {
        tracing::info!(
            event_type = event.event_type(),
            event_version = event.version(),
            "{event}"
        );
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(error = ?err, "failed to publish inventory notification");
        }
    }
}
