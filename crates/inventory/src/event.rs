use serde::{Deserialize, Serialize};

use perishable_events::Event;

/// Notification emitted by an [`Inventory`](crate::Inventory) operation.
///
/// `Display` renders the line shown to a human operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ItemAdded { name: String, code: String },
    InventoryEmpty,
    /// One row of a listing; `position` is 1-based.
    ItemListed { position: usize, description: String },
    ItemRemoved { index: usize, name: String },
    InvalidIndex { index: usize, len: usize },
    NoExpiredItems,
    ExpiredItemsRemoved { count: usize },
    ExpiredItemRemoved { name: String, code: String },
    ItemNotFound { code: String },
    /// The sale consumed the whole lot (or asked for more than it held).
    LotDepleted { name: String, code: String },
    LotSold {
        name: String,
        code: String,
        sold: u32,
        remaining: u32,
    },
    NoUpcomingExpirations { window_days: u32 },
    UpcomingExpiration { name: String, code: String, days: i64 },
    ExpiredItemReported {
        name: String,
        code: String,
        days_expired: i64,
    },
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded { .. } => "inventory.item.added",
            InventoryEvent::InventoryEmpty => "inventory.empty",
            InventoryEvent::ItemListed { .. } => "inventory.item.listed",
            InventoryEvent::ItemRemoved { .. } => "inventory.item.removed",
            InventoryEvent::InvalidIndex { .. } => "inventory.item.invalid_index",
            InventoryEvent::NoExpiredItems => "inventory.expired.none",
            InventoryEvent::ExpiredItemsRemoved { .. } => "inventory.expired.removed",
            InventoryEvent::ExpiredItemRemoved { .. } => "inventory.expired.item_removed",
            InventoryEvent::ItemNotFound { .. } => "inventory.sale.not_found",
            InventoryEvent::LotDepleted { .. } => "inventory.sale.depleted",
            InventoryEvent::LotSold { .. } => "inventory.sale.partial",
            InventoryEvent::NoUpcomingExpirations { .. } => "inventory.upcoming.none",
            InventoryEvent::UpcomingExpiration { .. } => "inventory.upcoming.item",
            InventoryEvent::ExpiredItemReported { .. } => "inventory.expired.reported",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl core::fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryEvent::ItemAdded { name, .. } => write!(f, "Item added: {name}"),
            InventoryEvent::InventoryEmpty => f.write_str("The inventory is empty."),
            InventoryEvent::ItemListed {
                position,
                description,
            } => write!(f, "{position}. {description}"),
            InventoryEvent::ItemRemoved { name, .. } => write!(f, "Item removed: {name}"),
            InventoryEvent::InvalidIndex { index, len } => {
                write!(f, "Invalid index: {index} (inventory holds {len} items).")
            }
            InventoryEvent::NoExpiredItems => {
                f.write_str("There are no expired items in the inventory.")
            }
            InventoryEvent::ExpiredItemsRemoved { count } => {
                write!(f, "Expired items removed: {count}")
            }
            InventoryEvent::ExpiredItemRemoved { name, code } => {
                write!(f, "- {name} (Code: {code})")
            }
            InventoryEvent::ItemNotFound { code } => {
                write!(f, "Item not found with code: {code}")
            }
            InventoryEvent::LotDepleted { name, .. } => {
                write!(f, "Item sold (stock depleted): {name}")
            }
            InventoryEvent::LotSold {
                name,
                sold,
                remaining,
                ..
            } => write!(
                f,
                "Item sold: {name} | Quantity: {sold} | Remaining stock: {remaining}"
            ),
            InventoryEvent::NoUpcomingExpirations { window_days } => write!(
                f,
                "There are no items expiring within the next {window_days} days."
            ),
            InventoryEvent::UpcomingExpiration { name, code, days } => {
                write!(f, "- {name} | Code: {code} | Expires in: {days} days")
            }
            InventoryEvent::ExpiredItemReported {
                name,
                code,
                days_expired,
            } => write!(f, "- {name} | Code: {code} | Expired: {days_expired} days ago"),
        }
    }
}
