//! Point-in-time copies of a store.

use crate::entity::ActorEntity;

/// Owned copy of a store's records (in insertion order) and of its next identifier.
///
/// Records are cloned out of the store when the snapshot is taken and cloned
/// again every time it is restored, so mutating the live store never reaches a
/// snapshot and one snapshot can serve as a baseline for many restores.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<T: ActorEntity> {
    entries: Vec<(T::Id, T)>,
    next_id: u32,
}

impl<T: ActorEntity> StoreSnapshot<T> {
    pub fn new(entries: Vec<(T::Id, T)>, next_id: u32) -> Self {
        Self { entries, next_id }
    }

    /// Records in the order they were inserted.
    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Value the sequencer held when the snapshot was taken.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<(T::Id, T)>, u32) {
        (self.entries, self.next_id)
    }
}
