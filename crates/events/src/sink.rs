//! Notification delivery boundary.
//!
//! A sink accepts a rendered [`Notification`] and gets it to the recipient
//! (console, log, message transport). The domain only guarantees that
//! `deliver` is called; whether anything is actually transmitted is the sink's
//! business, and delivery failures never travel back into the subject.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use thiserror::Error;

use crate::notification::Notification;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// Internal lock poisoning.
    #[error("sink state poisoned")]
    Poisoned,

    /// The recipient could not be reached.
    #[error("recipient unreachable: {0}")]
    Unreachable(String),
}

/// Delivers notifications to recipients.
///
/// `Send + Sync` so one sink can be shared by every observer in the process.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, notification: Notification) -> Result<(), SinkError>;
}

impl<S> NotificationSink for Arc<S>
where
    S: NotificationSink + ?Sized,
{
    fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
        (**self).deliver(notification)
    }
}

/// Console sink: emits each notification as a structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
        tracing::info!(
            event_type = notification.event_type(),
            subscriber = %notification.subscriber,
            channel = notification.recipient.channel(),
            item = %notification.item,
            "{}",
            notification.message
        );
        Ok(())
    }
}

/// A receiving end for delivered notifications.
///
/// Each subscription gets a copy of every notification delivered after it was
/// created.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Drain everything currently queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}
