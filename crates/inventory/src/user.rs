use std::sync::Arc;

use chrono::Utc;

use stockwatch_core::{Entity, SubscriberId};
use stockwatch_events::{Availability, Contact, Notification, NotificationSink, Observer};

use crate::item::Item;

/// A person who asked to hear about an item's availability.
///
/// On notification the user renders a message and hands it to the configured
/// sink. A failing sink is logged and otherwise ignored.
pub struct User {
    id: SubscriberId,
    name: String,
    contact: Contact,
    sink: Arc<dyn NotificationSink>,
}

impl User {
    pub fn new(name: impl Into<String>, contact: Contact, sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_id(SubscriberId::new(), name, contact, sink)
    }

    pub fn with_id(
        id: SubscriberId,
        name: impl Into<String>,
        contact: Contact,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            contact,
            sink,
        }
    }

    pub fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Render the notification this user would receive for `item` right now.
    pub fn render(&self, item: &Item) -> Notification {
        let (availability, tail) = if item.is_in_stock() {
            (Availability::BackInStock, "is back in stock!")
        } else {
            (Availability::OutOfStock, "is out of stock.")
        };

        Notification {
            subscriber: self.id,
            recipient: self.contact.clone(),
            item: item.name().to_string(),
            availability,
            message: format!(
                "Notification sent to {} at {}: {} {}",
                self.name,
                self.contact,
                item.name(),
                tail
            ),
            occurred_at: Utc::now(),
        }
    }
}

impl Observer<Item> for User {
    fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    fn update(&self, subject: &Item) {
        let notification = self.render(subject);
        if let Err(err) = self.sink.deliver(notification) {
            tracing::warn!(
                subscriber = %self.id,
                item = %subject.name(),
                error = %err,
                "notification delivery failed"
            );
        }
    }
}

impl Entity for User {
    type Id = SubscriberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwatch_events::{InMemorySink, SinkError, Subject};

    struct Unreachable;

    impl NotificationSink for Unreachable {
        fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
            Err(SinkError::Unreachable(notification.recipient.to_string()))
        }
    }

    fn john(sink: Arc<dyn NotificationSink>) -> User {
        User::new("John", Contact::email("john@example.com").unwrap(), sink)
    }

    #[test]
    fn back_in_stock_message() {
        let sink = Arc::new(InMemorySink::new());
        let user = john(sink.clone());
        let item = Item::new("item1", 2).unwrap();

        user.update(&item);

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(
            delivered[0].message,
            "Notification sent to John at john@example.com: item1 is back in stock!"
        );
        assert_eq!(delivered[0].availability, Availability::BackInStock);
        assert_eq!(delivered[0].subscriber, user.subscriber_id());
    }

    #[test]
    fn out_of_stock_message() {
        let sink = Arc::new(InMemorySink::new());
        let user = john(sink.clone());
        let item = Item::new("item1", 0).unwrap();

        let n = user.render(&item);
        assert_eq!(n.availability, Availability::OutOfStock);
        assert_eq!(
            n.message,
            "Notification sent to John at john@example.com: item1 is out of stock."
        );
        // Rendering alone delivers nothing.
        assert!(sink.is_empty());
    }

    #[test]
    fn mobile_contact_is_used_in_message() {
        let sink = Arc::new(InMemorySink::new());
        let user = User::new("Keshav", Contact::mobile("+15550100").unwrap(), sink.clone());
        let item = Item::new("iphone", 11).unwrap();

        user.update(&item);
        let n = &sink.delivered()[0];
        assert_eq!(n.recipient.channel(), "mobile");
        assert!(n.message.contains("at +15550100:"));
    }

    #[test]
    fn failing_sink_does_not_disturb_the_subject() {
        let user = Arc::new(john(Arc::new(Unreachable)));
        let mut item = Item::new("item1", 0).unwrap();
        item.attach(user);

        let outcome = item.update_stock(3).unwrap();
        assert_eq!(outcome.notified, 1);
        assert_eq!(item.stock(), 3);
    }

    #[test]
    fn entity_id_is_the_subscriber_id() {
        let user = john(Arc::new(InMemorySink::new()));
        assert_eq!(*user.id(), user.subscriber_id());
    }
}
