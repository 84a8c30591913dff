//! Inventory registry: owns items by name and routes commands to them.
//!
//! Every name-addressed operation returns `DomainError::NotFound` for an unknown
//! name and logs a warning. A miss never disturbs other items and the registry
//! stays fully usable afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockwatch_core::{DomainError, DomainResult, SubscriberId};
use stockwatch_events::{Observer, Subject};

use crate::item::Item;
use crate::stock::StockUpdate;

/// What `add_item` does when the name is already registered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Last write wins. The displaced item (and its subscriptions) is returned.
    #[default]
    Replace,
    /// Refuse with `DomainError::Conflict`; the registered item is kept.
    Reject,
}

impl core::str::FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::validation(format!(
                "unknown duplicate policy: {other:?} (expected \"replace\" or \"reject\")"
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
    policy: DuplicatePolicy,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            items: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register `item` under its name.
    ///
    /// Under `Replace`, returns the item previously registered under that name.
    pub fn add_item(&mut self, item: Item) -> DomainResult<Option<Item>> {
        let name = item.name().to_string();
        if self.items.contains_key(&name) && self.policy == DuplicatePolicy::Reject {
            tracing::warn!(item = %name, "duplicate item rejected");
            return Err(DomainError::conflict(format!("item already exists: {name}")));
        }

        let displaced = self.items.insert(name.clone(), item);
        if let Some(old) = &displaced {
            tracing::info!(
                item = %name,
                orphaned_subscribers = old.subscriber_count(),
                "item replaced"
            );
        } else {
            tracing::debug!(item = %name, "item added");
        }
        Ok(displaced)
    }

    /// Remove and return the named item. Its subscriptions go with it.
    pub fn remove_item(&mut self, name: &str) -> DomainResult<Item> {
        let item = self.items.remove(name).ok_or_else(|| missing(name))?;
        tracing::debug!(item = %name, "item removed");
        Ok(item)
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn update_item_stock(&mut self, name: &str, new_stock: i64) -> DomainResult<StockUpdate> {
        self.item_mut(name)?.update_stock(new_stock)
    }

    /// Subscribe `observer` to the named item. `Ok(false)` if it was already subscribed.
    pub fn register_user(
        &mut self,
        item_name: &str,
        observer: Arc<dyn Observer<Item>>,
    ) -> DomainResult<bool> {
        Ok(self.item_mut(item_name)?.attach(observer))
    }

    /// Unsubscribe from the named item. `Ok(false)` if it was not subscribed.
    pub fn unregister_user(
        &mut self,
        item_name: &str,
        subscriber: &SubscriberId,
    ) -> DomainResult<bool> {
        Ok(self.item_mut(item_name)?.detach(subscriber))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registered names in sorted order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    fn item_mut(&mut self, name: &str) -> DomainResult<&mut Item> {
        self.items.get_mut(name).ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> DomainError {
    tracing::warn!(item = %name, "item not found in inventory");
    DomainError::not_found(name)
}
