//! Scripted walk-through of the back-in-stock flow.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use stockwatch_core::DomainError;
use stockwatch_events::{Contact, NotificationSink};
use stockwatch_inventory::{DuplicatePolicy, Inventory, Item, StockLevel, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub name: String,
    pub stock: u64,
    pub level: StockLevel,
    pub subscribers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub notifications: usize,
    pub misses: usize,
    pub items: Vec<ItemSummary>,
}

/// Run the walk-through, delivering every notification to `sink`.
pub fn run(policy: DuplicatePolicy, sink: Arc<dyn NotificationSink>) -> anyhow::Result<Summary> {
    let mut inventory = Inventory::with_policy(policy);
    inventory
        .add_item(Item::new("item1", 0)?)
        .context("registering item1")?;
    inventory
        .add_item(Item::new("item2", 5)?)
        .context("registering item2")?;

    let john = Arc::new(User::new(
        "John",
        Contact::email("john@example.com")?,
        sink.clone(),
    ));
    let jane = Arc::new(User::new(
        "Jane",
        Contact::email("jane@example.com")?,
        sink.clone(),
    ));
    let keshav = Arc::new(User::new("Keshav", Contact::mobile("Keshav")?, sink));

    let mut notifications = 0;
    let mut misses = 0;

    // Nobody subscribed yet: these restocks go unnoticed.
    for (name, stock) in [("item1", 2), ("item1", 0), ("item2", 2)] {
        notifications += inventory.update_item_stock(name, stock)?.notified;
    }

    inventory.register_user("item1", john.clone())?;
    inventory.register_user("item1", jane.clone())?;
    inventory.register_user("item2", jane.clone())?;
    inventory.register_user("item2", keshav.clone())?;

    for (name, stock) in [
        ("item1", 1),
        ("item5", 2),
        ("item2", 5),
        ("item2", 0),
        ("item2", 11),
    ] {
        match inventory.update_item_stock(name, stock) {
            Ok(update) => notifications += update.notified,
            Err(DomainError::NotFound(_)) => misses += 1,
            Err(e) => return Err(e).with_context(|| format!("updating {name}")),
        }
    }

    inventory.unregister_user("item1", &john.subscriber_id())?;
    inventory.unregister_user("item2", &jane.subscriber_id())?;

    let items = inventory
        .item_names()
        .filter_map(|name| inventory.get_item(name))
        .map(|item| ItemSummary {
            name: item.name().to_string(),
            stock: item.stock(),
            level: item.level(),
            subscribers: item.subscriber_count(),
        })
        .collect();

    Ok(Summary {
        notifications,
        misses,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwatch_events::InMemorySink;

    #[test]
    fn walkthrough_counts() {
        let sink = Arc::new(InMemorySink::new());
        let summary = run(DuplicatePolicy::Reject, sink.clone()).unwrap();

        // item1: John + Jane once; item2: Jane + Keshav once (0 -> 11).
        assert_eq!(summary.notifications, 4);
        assert_eq!(sink.len(), 4);
        assert_eq!(summary.misses, 1);

        assert_eq!(
            summary.items,
            vec![
                ItemSummary {
                    name: "item1".to_string(),
                    stock: 1,
                    level: StockLevel::InStock,
                    subscribers: 1,
                },
                ItemSummary {
                    name: "item2".to_string(),
                    stock: 11,
                    level: StockLevel::InStock,
                    subscribers: 1,
                },
            ]
        );
    }

    #[test]
    fn summary_serializes() {
        let summary = run(DuplicatePolicy::Replace, Arc::new(InMemorySink::new())).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["items"][0]["level"], "in_stock");
        assert_eq!(json["misses"], 1);
    }
}
