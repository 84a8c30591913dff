//! In-memory notification sink for tests/dev.

use std::sync::{Mutex, mpsc};

use crate::notification::Notification;
use crate::sink::{NotificationSink, SinkError, Subscription};

/// In-memory sink.
///
/// - No IO
/// - Keeps every delivered notification (see [`InMemorySink::delivered`])
/// - Best-effort fan-out to channel subscriptions
#[derive(Debug, Default)]
pub struct InMemorySink {
    delivered: Mutex<Vec<Notification>>,
    subscribers: Mutex<Vec<mpsc::Sender<Notification>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a channel that receives every notification delivered from now on.
    pub fn subscribe(&self) -> Subscription<Notification> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never fills.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }

    /// Snapshot of everything delivered so far, in delivery order.
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget recorded notifications (subscriptions stay open).
    pub fn clear(&self) {
        if let Ok(mut d) = self.delivered.lock() {
            d.clear();
        }
    }
}

impl NotificationSink for InMemorySink {
    fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
        {
            let mut subs = self.subscribers.lock().map_err(|_| SinkError::Poisoned)?;
            // Drop any dead subscribers while delivering.
            subs.retain(|tx| tx.send(notification.clone()).is_ok());
        }

        self.delivered
            .lock()
            .map_err(|_| SinkError::Poisoned)?
            .push(notification);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Availability, Contact};
    use chrono::Utc;
    use stockwatch_core::SubscriberId;

    fn notification(item: &str) -> Notification {
        Notification {
            subscriber: SubscriberId::new(),
            recipient: Contact::email("john@example.com").unwrap(),
            item: item.to_string(),
            availability: Availability::BackInStock,
            message: format!("{item} is back in stock!"),
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn records_deliveries_in_order() {
        let sink = InMemorySink::new();
        sink.deliver(notification("a")).unwrap();
        sink.deliver(notification("b")).unwrap();

        let items: Vec<_> = sink.delivered().into_iter().map(|n| n.item).collect();
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(sink.len(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn subscriptions_only_see_later_deliveries() {
        let sink = InMemorySink::new();
        sink.deliver(notification("before")).unwrap();

        let sub = sink.subscribe();
        sink.deliver(notification("after")).unwrap();

        let seen = sub.drain();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].item, "after");
    }

    #[test]
    fn dropped_subscriptions_do_not_break_delivery() {
        let sink = InMemorySink::new();
        drop(sink.subscribe());
        assert!(sink.deliver(notification("x")).is_ok());
        assert_eq!(sink.len(), 1);
    }
}
