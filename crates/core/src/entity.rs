//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Items are identified by their name, users by their `SubscriberId`.
pub trait Entity {
    /// Identifier that stays fixed while the rest of the state changes.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
