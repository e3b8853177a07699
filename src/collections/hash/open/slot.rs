use derive_more::IsVariant;

/// The state of one position in an [`OpenHashMap`](super::OpenHashMap).
///
/// Removing an entry leaves a `Tombstone` rather than an `Empty` slot. Lookups probe past
/// tombstones, so keys placed further along the same probe sequence stay reachable, while inserts
/// may reuse them.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub const fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        }
    }
}
