//! Back-in-stock notification domain.
//!
//! Items are observable subjects; users are observers. The registry owns the
//! items and routes stock updates and subscriptions to them by name. Pure
//! in-process logic: no IO beyond the notification sink handed to each user.

pub mod item;
pub mod registry;
pub mod stock;
pub mod user;

#[cfg(test)]
mod test_support;

pub use item::Item;
pub use registry::{DuplicatePolicy, Inventory};
pub use stock::{StockLevel, StockUpdate, Transition};
pub use user::User;
