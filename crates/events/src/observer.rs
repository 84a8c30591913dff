//! Subject/Observer capability contract (mechanics only).
//!
//! A **subject** holds observable state plus a set of subscribed observers. An
//! **observer** has exactly one capability: reacting to a subject it is attached
//! to. Notification is synchronous and in-process; every observer has returned
//! before the call that triggered it returns.
//!
//! Subscription sets are keyed by [`SubscriberId`], so they behave like sets:
//! no duplicates, no ordering guarantees.

use std::sync::Arc;

use stockwatch_core::SubscriberId;

/// Reacts to notifications from a subject of type `S`.
///
/// `update` receives the subject by shared reference and therefore cannot mutate
/// it. Implementations must not fail for a well-formed subject; delivery problems
/// belong to whatever collaborator the observer hands its message to.
pub trait Observer<S: ?Sized>: Send + Sync {
    /// Identity used for set membership.
    fn subscriber_id(&self) -> SubscriberId;

    /// React to a notification from `subject`.
    fn update(&self, subject: &S);
}

/// Shared observer handle as stored in subscription sets.
pub type SharedObserver<S> = Arc<dyn Observer<S>>;

/// Something that can be observed.
pub trait Subject {
    /// Add `observer` to the subscription set.
    ///
    /// Returns `false` if an observer with the same id was already attached (no-op).
    fn attach(&mut self, observer: Arc<dyn Observer<Self>>) -> bool;

    /// Remove the observer with `subscriber`'s id. Returns `false` if absent (no-op).
    fn detach(&mut self, subscriber: &SubscriberId) -> bool;

    /// Invoke `update` once on every attached observer, in unspecified order.
    ///
    /// Returns the number of observers notified.
    fn notify_observers(&self) -> usize;
}
