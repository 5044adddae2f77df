//! Demonstration driver: replays a fixed sequence of stock operations and
//! prints every notification in order.

mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};

use perishable_events::{Event, Subscription};
use perishable_inventory::{Inventory, InventoryEvent, Item};

use crate::config::{DemoConfig, Output};

const STARTING_STOCK: [(&str, &str, u32, &str); 5] = [
    ("Milk", "L001", 50, "2025-04-15"),
    ("Bread", "P001", 30, "2025-03-25"),
    ("Cheese", "Q001", 20, "2025-05-10"),
    ("Yogurt", "I001", 40, "2025-03-20"),
    ("Butter", "M001", 15, "2025-06-01"),
];

fn main() -> Result<()> {
    perishable_observability::init();

    let config = DemoConfig::from_env().context("loading demo configuration")?;
    let today = config.clock().today();
    tracing::info!(%today, window_days = config.window_days, "starting inventory demo");

    let mut inventory = Inventory::new();
    let notifications = inventory.subscribe();
    let mut out = Printer {
        notifications,
        output: config.output,
    };

    out.heading("1. Adding items to the inventory")?;
    for (name, code, quantity, expires) in STARTING_STOCK {
        inventory.add(Item::parse(name, code, quantity, expires)?);
    }
    out.flush()?;

    out.heading("2. Listing items by expiration date")?;
    inventory.list(today);
    out.flush()?;

    out.heading(&format!(
        "3. Items expiring within {} days",
        config.window_days
    ))?;
    inventory.upcoming_expirations(today, config.window_days);
    out.flush()?;

    out.heading("4. Selling items")?;
    for (code, quantity) in [("I001", 15), ("P001", 30)] {
        if let Err(err) = inventory.sell(code, quantity) {
            tracing::warn!(code, quantity, error = %err, "sale rejected");
        }
    }
    out.flush()?;

    out.heading("5. Listing items after sales")?;
    inventory.list(today);
    out.flush()?;

    out.heading("6. Removing expired items")?;
    inventory.remove_expired(today);
    out.flush()?;

    out.heading("7. Expired items report")?;
    inventory.expired_report(today);
    out.flush()?;

    out.heading("8. Adding an already expired item")?;
    inventory.add(Item::parse("Chocolate", "C001", 10, "2025-01-01")?);
    out.flush()?;

    out.heading("9. Expired items report after the addition")?;
    inventory.expired_report(today);
    out.flush()?;

    out.heading("10. Removing expired items")?;
    inventory.remove_expired(today);
    out.flush()?;

    out.heading("11. Final inventory")?;
    inventory.list(today);
    out.flush()?;

    tracing::info!(remaining_lots = inventory.len(), "inventory demo finished");
    Ok(())
}

/// Writes headings and drained notifications to stdout.
struct Printer {
    notifications: Subscription<InventoryEvent>,
    output: Output,
}

impl Printer {
    fn heading(&mut self, title: &str) -> Result<()> {
        match self.output {
            Output::Text => self.write(&format!("\n=== {title} ===")),
            Output::Json => self.write(&serde_json::json!({ "heading": title }).to_string()),
        }
    }

    /// Print every notification published since the last flush.
    fn flush(&mut self) -> Result<()> {
        for event in self.notifications.drain() {
            let rendered = match self.output {
                Output::Text => event.to_string(),
                Output::Json => {
                    let payload =
                        serde_json::to_value(&event).context("serializing notification")?;
                    serde_json::json!({
                        "event_type": event.event_type(),
                        "version": event.version(),
                        "message": event.to_string(),
                        "payload": payload,
                    })
                    .to_string()
                }
            };
            self.write(&rendered)?;
        }
        Ok(())
    }

    fn write(&self, text: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "{text}").context("writing to stdout")
    }
}
