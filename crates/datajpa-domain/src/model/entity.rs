//! Entity - what a storage engine needs to know about a record
//!
//! A storage engine keeps rows keyed by identifier and hands out new
//! identifiers from a sequence. Entities that have never been saved are
//! *transient* and report no identifier.

use core::fmt::{Debug, Display};

/// A persistable record with a sequence-assigned identifier.
pub trait Entity: Clone + Debug {
    /// Strongly typed identifier, backed by a `u64` sequence value.
    type Id: Copy + Ord + Debug + Display + From<u64> + Into<u64>;

    /// Entity name used in log lines and error messages.
    const NAME: &'static str;

    /// The identifier, or `None` while the entity is transient.
    fn id(&self) -> Option<Self::Id>;

    /// Called by the storage engine when the entity is first saved.
    fn assign_id(&mut self, id: Self::Id);

    /// Whether the entity has never been saved.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
