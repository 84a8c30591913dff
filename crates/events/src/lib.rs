//! Observer contract and notification delivery.

pub mod in_memory_sink;
pub mod notification;
pub mod observer;
pub mod sink;

pub use in_memory_sink::InMemorySink;
pub use notification::{Availability, Contact, Notification};
pub use observer::{Observer, SharedObserver, Subject};
pub use sink::{NotificationSink, SinkError, Subscription, TracingSink};
