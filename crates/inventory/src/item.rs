use std::collections::HashMap;
use std::sync::Arc;

use stockwatch_core::{DomainError, DomainResult, Entity, SubscriberId};
use stockwatch_events::{Observer, SharedObserver, Subject};

use crate::stock::{StockLevel, StockUpdate, Transition};

/// A stock-keeping unit that users can watch for restocks.
///
/// Each item owns its own subscriber set; nothing is shared between instances.
pub struct Item {
    name: String,
    stock: u64,
    observers: HashMap<SubscriberId, SharedObserver<Item>>,
}

impl Item {
    /// Create an item with an initial stock count.
    ///
    /// Rejects blank names and negative counts.
    pub fn new(name: impl Into<String>, stock: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            name,
            stock: non_negative(stock)?,
            observers: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn level(&self) -> StockLevel {
        StockLevel::of(self.stock)
    }

    pub fn is_in_stock(&self) -> bool {
        self.level() == StockLevel::InStock
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_subscribed(&self, subscriber: &SubscriberId) -> bool {
        self.observers.contains_key(subscriber)
    }

    /// Set the stock count.
    ///
    /// The new count is stored before observers run, so they see it. Observers
    /// are notified only on the out-of-stock to in-stock transition.
    pub fn update_stock(&mut self, new_stock: i64) -> DomainResult<StockUpdate> {
        let current = non_negative(new_stock)?;
        let previous = self.stock;
        self.stock = current;

        let transition = Transition::between(previous, current);
        let notified = if transition.notifies() {
            self.notify_observers()
        } else {
            0
        };

        tracing::debug!(
            item = %self.name,
            previous,
            current,
            ?transition,
            notified,
            "stock updated"
        );

        Ok(StockUpdate {
            previous,
            current,
            transition,
            notified,
        })
    }
}

fn non_negative(stock: i64) -> DomainResult<u64> {
    u64::try_from(stock)
        .map_err(|_| DomainError::validation(format!("stock cannot be negative (got {stock})")))
}

impl Subject for Item {
    fn attach(&mut self, observer: Arc<dyn Observer<Self>>) -> bool {
        let id = observer.subscriber_id();
        if self.observers.contains_key(&id) {
            return false;
        }
        self.observers.insert(id, observer);
        tracing::debug!(item = %self.name, subscriber = %id, "observer attached");
        true
    }

    fn detach(&mut self, subscriber: &SubscriberId) -> bool {
        let removed = self.observers.remove(subscriber).is_some();
        if removed {
            tracing::debug!(item = %self.name, subscriber = %subscriber, "observer detached");
        }
        removed
    }

    fn notify_observers(&self) -> usize {
        for observer in self.observers.values() {
            observer.update(self);
        }
        self.observers.len()
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Debug for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut subscribers: Vec<_> = self.observers.keys().collect();
        subscribers.sort();
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("stock", &self.stock)
            .field("subscribers", &subscribers)
            .finish()
    }
}
