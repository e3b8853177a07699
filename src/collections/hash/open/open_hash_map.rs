use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::{cmp, mem};

use super::{Iter, Keys, ProbeSequence, Slot, Values};
use crate::collections::contiguous::Array;
use crate::collections::hash::config::OpenTableConfig;
use crate::collections::hash::hasher::PolynomialState;
use crate::collections::hash::prime;
use crate::util::error::{AllocError, CapacityOverflow, TableError};
use crate::util::fmt::DebugRaw;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values which stores entries directly in an array of [`Slot`]s, probing from a
/// key's home slot until it finds the key or a free slot.
///
/// The capacity is always a prime number, so that quadratic probing spreads colliding keys across
/// the table. Before every insertion, the map checks its load factor (`len / cap`, with tombstones
/// excluded from `len`). If it has reached the configured threshold, the map grows to the next
/// prime at or above twice its capacity, rehashing every live entry and discarding tombstones.
///
/// Each probe examines at most `cap - 1` slots, and a quadratic sequence may cycle through a subset
/// of the table before that. If a probe ends without finding the key or a free slot, a lookup
/// reports the key as absent and an insertion grows the table and tries again.
///
/// It is a logic error for keys in an OpenHashMap to be manipulated in a way that changes their
/// hash. Because of this, the API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the OpenHashMap.
/// - `c`: The capacity of the OpenHashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(c)` |
/// | `get` | `O(1)`*, `O(c)` |
/// | `remove` | `O(1)`*, `O(c)` |
/// | `contains` | `O(1)`*, `O(c)` |
/// | `resize` | `O(c + n)` |
///
/// \* Probing takes additional time for each collision or tombstone along the probe sequence.
///
/// \** If the load factor has been reached, `insert` resizes first. \* applies as well.
pub struct OpenHashMap<K: Hash + Eq, V, B: BuildHasher = PolynomialState> {
    pub(crate) slots: Array<Slot<K, V>>,
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
    pub(crate) config: OpenTableConfig,
    pub(crate) hasher: B,
}

/// The outcome of probing for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probed {
    /// The key is stored at this index.
    Found(usize),
    /// The key is absent. This is the first tombstone or empty slot along its probe sequence.
    Vacant(usize),
    /// The key is absent and its probe sequence has no free slots.
    Exhausted,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> OpenHashMap<K, V, B> {
    /// Creates a new OpenHashMap with capacity 0, the default configuration and the default value
    /// for `B`. Memory will be allocated by the first insertion.
    pub fn new() -> OpenHashMap<K, V, B> {
        OpenHashMap::with_hasher(B::default())
    }

    /// Creates a new OpenHashMap with the smallest prime capacity of at least `cap`, the default
    /// configuration and the default hasher.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the slots can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::OpenHashMap;
    /// let map: OpenHashMap<u32, u32> = OpenHashMap::with_cap(10).unwrap();
    /// assert_eq!(map.cap(), 11);
    /// ```
    pub fn with_cap(cap: usize) -> Result<OpenHashMap<K, V, B>, AllocError> {
        Self::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new OpenHashMap with the smallest prime capacity of at least `cap` and the
    /// provided `config`.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidLoadFactor`] if the config is rejected by
    /// [`OpenTableConfig::validate`], or [`TableError::Alloc`] if the slots can't be allocated.
    pub fn with_cap_and_config(
        cap: usize,
        config: OpenTableConfig,
    ) -> Result<OpenHashMap<K, V, B>, TableError> {
        Self::from_parts(cap, config, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> OpenHashMap<K, V, B> {
    /// Creates a new OpenHashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> OpenHashMap<K, V, B> {
        OpenHashMap {
            slots: Array::new(),
            len: 0,
            tombstones: 0,
            config: OpenTableConfig::new(),
            hasher,
        }
    }

    /// Creates a new OpenHashMap with the smallest prime capacity of at least `cap` and the
    /// provided `hasher`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the slots can't be allocated.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Result<OpenHashMap<K, V, B>, AllocError> {
        Ok(OpenHashMap {
            slots: Self::empty_slots(Self::prime_cap(cap)?)?,
            len: 0,
            tombstones: 0,
            config: OpenTableConfig::new(),
            hasher,
        })
    }

    /// Creates a new OpenHashMap from every tunable part.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidLoadFactor`] if the config is rejected by
    /// [`OpenTableConfig::validate`], or [`TableError::Alloc`] if the slots can't be allocated.
    pub fn from_parts(
        cap: usize,
        config: OpenTableConfig,
        hasher: B,
    ) -> Result<OpenHashMap<K, V, B>, TableError> {
        config.validate()?;

        Ok(OpenHashMap {
            slots: Self::empty_slots(Self::prime_cap(cap)?)?,
            len: 0,
            tombstones: 0,
            config,
            hasher,
        })
    }

    /// Returns the number of live entries in the OpenHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the OpenHashMap contains no live entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, always 0 or a prime.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Returns the number of slots left behind by removed entries since the last resize.
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub const fn config(&self) -> &OpenTableConfig {
        &self.config
    }

    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns every slot, in index order.
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Returns the current ratio of live entries to slots, or 0 if there are no slots.
    pub fn load_factor(&self) -> f64 {
        if self.cap() == 0 {
            0.0
        } else {
            self.len as f64 / self.cap() as f64
        }
    }

    /// Inserts the provided `key`-`value` pair, resizing first if the map has reached its load
    /// factor. The entry goes into the first tombstone along the key's probe sequence, or the
    /// first empty slot if there are no tombstones before it.
    ///
    /// Returns false, leaving the existing entry untouched, if the key is already present.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if a required resize fails, leaving the map unmodified.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::OpenHashMap;
    /// let mut map: OpenHashMap<&str, u32> = OpenHashMap::with_cap(5).unwrap();
    /// assert_eq!(map.insert("one", 1), Ok(true));
    /// assert_eq!(map.insert("one", 10), Ok(false));
    /// assert_eq!(map.get("one"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, AllocError> {
        if self.should_grow() {
            self.grow()?;
        }

        loop {
            match self.probe(&key) {
                Probed::Found(_) => return Ok(false),
                Probed::Vacant(index) => {
                    if self.slots[index].is_tombstone() {
                        self.tombstones -= 1;
                    }
                    self.slots[index] = Slot::Occupied(key, value);
                    self.len += 1;
                    return Ok(true);
                },
                Probed::Exhausted => {
                    log::debug!(
                        "no free slot along probe sequence at capacity {}, growing",
                        self.cap()
                    );
                    self.grow()?;
                },
            }
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key) {
            Probed::Found(index) => self.slots[index].entry(),
            _ => None,
        }
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key) {
            Probed::Found(index) => match &mut self.slots[index] {
                Slot::Occupied(_, v) => Some(v),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.probe(key), Probed::Found(_))
    }

    /// Removes the entry associated with `key`, returning it if it exists. The slot becomes a
    /// tombstone, so later keys on the same probe sequence can still be found.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Probed::Found(index) = self.probe(key) else {
            return None;
        };

        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied(k, v) => {
                self.len -= 1;
                self.tombstones += 1;
                Some((k, v))
            },
            other => {
                // Found always points at an occupied slot, put back whatever was there.
                self.slots[index] = other;
                None
            },
        }
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Reallocates the OpenHashMap with the smallest prime capacity of at least `new_cap`, placing
    /// every live entry along its probe sequence in the new slots and discarding all tombstones.
    /// If the live entries can't all be placed at that capacity, the next prime at or above double
    /// it is tried instead, until they fit.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new slots can't be allocated, leaving the map unmodified.
    ///
    /// # Panics
    /// Panics if a key's hash changes while the entries are being moved, which can only happen if
    /// its [`Hash`] implementation isn't deterministic.
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocError> {
        let old_cap = self.cap();
        let mut new_cap = Self::prime_cap(new_cap)?;

        while !self.fits_in(new_cap)? {
            new_cap = Self::prime_cap(new_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?)?;
        }

        let mut new_slots = Self::empty_slots(new_cap)?;
        let probe = self.config.probe;

        for slot in self.slots.iter_mut() {
            if !slot.is_occupied() {
                continue;
            }
            let Slot::Occupied(key, value) = mem::replace(slot, Slot::Empty) else {
                continue;
            };

            let home = Self::home_index(self.hasher.hash_one(&key), new_cap);
            let index = ProbeSequence::new(probe, home, new_cap).find(|i| new_slots[*i].is_empty());
            match index {
                Some(index) => new_slots[index] = Slot::Occupied(key, value),
                // UNREACHABLE: fits_in has just placed every key along this same sequence.
                None => unreachable!("key no longer fits after resize check, is its hash stable?"),
            }
        }

        self.slots = new_slots;
        self.tombstones = 0;

        log::debug!(
            "resized open hash map from {old_cap} to {new_cap} slots ({} entries)",
            self.len
        );
        Ok(())
    }

    /// Drops every entry and tombstone, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over all key-value pairs, in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the OpenHashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the OpenHashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> OpenHashMap<K, V, B> {
    /// Determines whether the map has reached its load factor, meaning it should grow before
    /// inserting.
    pub(crate) fn should_grow(&self) -> bool {
        self.cap() == 0 || self.load_factor() >= self.config.load_factor
    }

    /// Grows the OpenHashMap to the next prime at or above the growth factor times its capacity.
    pub(crate) fn grow(&mut self) -> Result<(), AllocError> {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
            MIN_ALLOCATED_CAP,
        );

        self.resize(new_cap)
    }

    /// Walks the probe sequence for `key`, stopping at the key itself or the first empty slot.
    /// Tombstones are skipped, but the first one seen is remembered as the vacancy, so an insert
    /// reuses it without creating a duplicate of a key stored further along.
    pub(crate) fn probe<Q>(&self, key: &Q) -> Probed
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cap = self.cap();
        if cap == 0 {
            return Probed::Exhausted;
        }

        let home = Self::home_index(self.hasher.hash_one(key), cap);
        let mut vacancy = None;

        for index in ProbeSequence::new(self.config.probe, home, cap) {
            match &self.slots[index] {
                Slot::Empty => return Probed::Vacant(vacancy.unwrap_or(index)),
                Slot::Tombstone => {
                    vacancy.get_or_insert(index);
                },
                Slot::Occupied(existing, _) => {
                    if existing.borrow() == key {
                        return Probed::Found(index);
                    }
                },
            }
        }

        log::trace!("probe sequence from slot {home} ended without an empty slot at capacity {cap}");
        vacancy.map_or(Probed::Exhausted, Probed::Vacant)
    }

    /// Checks whether every live entry can be placed along its probe sequence in a table of
    /// `cap` empty slots.
    pub(crate) fn fits_in(&self, cap: usize) -> Result<bool, AllocError> {
        let mut taken = Array::try_repeat_with(cap, || false)?;

        for slot in self.slots.iter() {
            let Slot::Occupied(key, _) = slot else {
                continue;
            };

            let home = Self::home_index(self.hasher.hash_one(key), cap);
            match ProbeSequence::new(self.config.probe, home, cap).find(|i| !taken[*i]) {
                Some(index) => taken[index] = true,
                None => return Ok(false),
            }
        }

        Ok(true)
    }

    pub(crate) fn prime_cap(cap: usize) -> Result<usize, CapacityOverflow> {
        prime::next_prime(cmp::max(cap, MIN_ALLOCATED_CAP)).ok_or(CapacityOverflow)
    }

    pub(crate) fn empty_slots(cap: usize) -> Result<Array<Slot<K, V>>, AllocError> {
        Array::try_repeat_with(cap, || Slot::Empty)
    }

    /// Reduces a hash to a slot index. `cap` must be nonzero.
    pub(crate) const fn home_index(hash: u64, cap: usize) -> usize {
        (hash % cap as u64) as usize
    }
}

impl<K: Hash + Eq, V> Default for OpenHashMap<K, V> {
    fn default() -> Self {
        OpenHashMap::new()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for OpenHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHashMap")
            .field("slots", &DebugSlots(&self.slots))
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("cap", &self.cap())
            .field("probe", &self.config.probe)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for OpenHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats empty slots as `-` and tombstones as `x`.
struct DebugSlots<'a, K, V>(&'a [Slot<K, V>]);

impl<K: Debug, V: Debug> Debug for DebugSlots<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|slot| DebugRaw(match slot {
                Slot::Empty => "-".into(),
                Slot::Occupied(k, v) => format!("({k:?}: {v:?})"),
                Slot::Tombstone => "x".into(),
            })))
            .finish()
    }
}
