use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::{cmp, mem};

use super::{Iter, Keys, Values};
use crate::collections::contiguous::Array;
use crate::collections::hash::config::TableConfig;
use crate::collections::hash::hasher::PolynomialState;
use crate::util::error::{AllocError, CapacityOverflow, TableError};
use crate::util::fmt::DebugRaw;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values which stores every entry in a chain hanging off the bucket its key
/// hashes to.
///
/// Before a new key is inserted, the map checks the load factor it would have with that key
/// (`(len + 1) / cap`). If that reaches the configured threshold, the number of buckets doubles
/// and every entry is relinked into the bucket it hashes to under the new capacity. Updating an
/// existing key never resizes.
///
/// New entries are added to the front of their chain, so the most recently inserted key in a
/// bucket is always found first.
///
/// It is a logic error for keys in a ChainedHashMap to be manipulated in a way that changes their
/// hash. Because of this, the API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ChainedHashMap.
/// - `c`: The length of the chain in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `resize` | `O(n)` |
///
/// \* If the load factor has been reached, `insert` resizes first, taking `O(n)`.
pub struct ChainedHashMap<K: Hash + Eq, V, B: BuildHasher = PolynomialState> {
    pub(crate) buckets: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) config: TableConfig,
    pub(crate) hasher: B,
}

pub(crate) type Chain<K, V> = Option<Box<ChainNode<K, V>>>;

pub(crate) struct ChainNode<K, V> {
    pub key: K,
    pub value: V,
    pub next: Chain<K, V>,
}

/// The head of a chain, along with the number of entries in it.
pub(crate) struct Bucket<K, V> {
    pub len: usize,
    pub head: Chain<K, V>,
}

impl<K, V> Bucket<K, V> {
    pub const fn empty() -> Bucket<K, V> {
        Bucket {
            len: 0,
            head: None,
        }
    }

    pub fn push_front(&mut self, mut node: Box<ChainNode<K, V>>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }
}

impl<K, V> Drop for Bucket<K, V> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, rather than recursing through every Box in the chain.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> ChainedHashMap<K, V, B> {
    /// Creates a new ChainedHashMap with capacity 0, the default configuration and the default
    /// value for `B`. Memory will be allocated by the first insertion.
    pub fn new() -> ChainedHashMap<K, V, B> {
        ChainedHashMap {
            buckets: Array::new(),
            len: 0,
            config: TableConfig::new(),
            hasher: B::default(),
        }
    }

    /// Creates a new ChainedHashMap with exactly `cap` buckets, the default configuration and the
    /// default hasher.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the buckets can't be allocated.
    pub fn with_cap(cap: usize) -> Result<ChainedHashMap<K, V, B>, AllocError> {
        Self::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new ChainedHashMap with exactly `cap` buckets and the provided `config`.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidLoadFactor`] if the config is rejected by
    /// [`TableConfig::validate`], or [`TableError::Alloc`] if the buckets can't be allocated.
    pub fn with_cap_and_config(
        cap: usize,
        config: TableConfig,
    ) -> Result<ChainedHashMap<K, V, B>, TableError> {
        Self::from_parts(cap, config, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Creates a new ChainedHashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap {
            buckets: Array::new(),
            len: 0,
            config: TableConfig::new(),
            hasher,
        }
    }

    /// Creates a new ChainedHashMap with exactly `cap` buckets and the provided `hasher`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the buckets can't be allocated.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Result<ChainedHashMap<K, V, B>, AllocError> {
        Ok(ChainedHashMap {
            buckets: Array::try_repeat_with(cap, Bucket::empty)?,
            len: 0,
            config: TableConfig::new(),
            hasher,
        })
    }

    /// Creates a new ChainedHashMap from every tunable part.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidLoadFactor`] if the config is rejected by
    /// [`TableConfig::validate`], or [`TableError::Alloc`] if the buckets can't be allocated.
    pub fn from_parts(
        cap: usize,
        config: TableConfig,
        hasher: B,
    ) -> Result<ChainedHashMap<K, V, B>, TableError> {
        config.validate()?;

        Ok(ChainedHashMap {
            buckets: Array::try_repeat_with(cap, Bucket::empty)?,
            len: 0,
            config,
            hasher,
        })
    }

    /// Returns the number of entries in the ChainedHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ChainedHashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns the current ratio of entries to buckets, or 0 if there are no buckets.
    pub fn load_factor(&self) -> f64 {
        if self.cap() == 0 {
            0.0
        } else {
            self.len as f64 / self.cap() as f64
        }
    }

    /// Associates `value` with `key`. If the key was already present, its value is replaced in
    /// place and the previous value is returned. Otherwise, the map resizes if the new entry would
    /// bring it to its load factor and the new entry is added to the front of its bucket's chain.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if a required resize fails, leaving the map unmodified.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::ChainedHashMap;
    /// let mut map: ChainedHashMap<&str, u32> = ChainedHashMap::with_cap(5).unwrap();
    /// assert_eq!(map.insert("one", 1), Ok(None));
    /// assert_eq!(map.insert("one", 10), Ok(Some(1)));
    /// assert_eq!(map.get("one"), Some(&10));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, AllocError> {
        if let Some(existing) = self.get_mut(&key) {
            return Ok(Some(mem::replace(existing, value)));
        }

        if self.should_grow() {
            self.grow()?;
        }

        let index = self.index_from_hash(self.hasher.hash_one(&key));
        self.buckets[index].push_front(Box::new(ChainNode {
            key,
            value,
            next: None,
        }));
        self.len += 1;

        Ok(None)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut link = &self.buckets[self.index_for_key(key)?].head;

        while let Some(node) = link {
            if node.key.borrow() == key {
                return Some((&node.key, &node.value));
            }
            link = &node.next;
        }

        None
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
        let index = self.index_for_key(key)?;
        let mut link = &mut self.buckets[index].head;

        while let Some(node) = link {
            if node.key.borrow() == key {
                return Some(&mut node.value);
            }
            link = &mut node.next;
        }

        None
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. The rest of the chain is
    /// relinked around the removed node. Removing never shrinks the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for_key(key)?;
        let bucket = &mut self.buckets[index];
        let mut link = &mut bucket.head;

        while link.as_ref().is_some_and(|node| node.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }

        let node = link.take()?;
        let ChainNode { key, value, next } = *node;
        *link = next;

        bucket.len -= 1;
        log::trace!("unlinked entry from bucket {index}, {} left in its chain", bucket.len);

        self.len -= 1;
        Some((key, value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Reallocates the ChainedHashMap with `new_cap` buckets, relinking every node into the bucket
    /// its key hashes to under the new capacity. Nodes are moved, never copied. A `new_cap` of 0 is
    /// treated as 1 while the map holds any entries.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new buckets can't be allocated, leaving the map unmodified.
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocError> {
        let new_cap = if self.len == 0 { new_cap } else { cmp::max(new_cap, 1) };
        let old_cap = self.cap();

        // Replace the Array first so that the old chains can be drained into the new one.
        let mut old_buckets = mem::replace(
            &mut self.buckets,
            Array::try_repeat_with(new_cap, Bucket::empty)?,
        );

        for bucket in old_buckets.iter_mut() {
            let mut link = bucket.head.take();
            bucket.len = 0;

            while let Some(mut node) = link {
                link = node.next.take();
                let index = self.index_from_hash(self.hasher.hash_one(&node.key));
                self.buckets[index].push_front(node);
            }
        }

        log::debug!(
            "resized chained hash map from {old_cap} to {new_cap} buckets ({} entries)",
            self.len
        );
        Ok(())
    }

    /// Drops every entry, keeping the current number of buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = Bucket::empty();
        }
        self.len = 0;
    }

    /// Returns the number of entries chained in each bucket, in bucket order.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|bucket| bucket.len)
    }

    /// Returns the number of buckets holding at least one entry.
    pub fn occupied_buckets(&self) -> usize {
        self.bucket_lens().filter(|len| *len != 0).count()
    }

    /// Returns an iterator over all key-value pairs, bucket by bucket and front to back within
    /// each chain.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the ChainedHashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the ChainedHashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Determines whether adding one more key would bring the map to its load factor, meaning it
    /// should grow before that key is added.
    pub(crate) fn should_grow(&self) -> bool {
        self.cap() == 0 || (self.len + 1) as f64 / self.cap() as f64 >= self.config.load_factor
    }

    /// Grows the ChainedHashMap by the growth factor.
    pub(crate) fn grow(&mut self) -> Result<(), AllocError> {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
            MIN_ALLOCATED_CAP,
        );

        self.resize(new_cap)
    }

    /// Calculates the bucket for the provided `key`, or None if there are no buckets.
    pub(crate) fn index_for_key<Q: Hash + ?Sized>(&self, key: &Q) -> Option<usize> {
        let key_hash = self.hasher.hash_one(key);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Reduces a hash to a bucket index. The map must have at least one bucket.
    pub(crate) fn index_from_hash(&self, hash: u64) -> usize {
        (hash % self.cap() as u64) as usize
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        ChainedHashMap::new()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("buckets", &DebugBuckets(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats each bucket as its chain, `[]` when empty.
struct DebugBuckets<'a, K: Hash + Eq, V, B: BuildHasher>(&'a ChainedHashMap<K, V, B>);

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for DebugBuckets<'_, K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.buckets.iter().map(|bucket| {
                let mut chain = Vec::with_capacity(bucket.len);
                let mut link = &bucket.head;
                while let Some(node) = link {
                    chain.push(format!("({:?}: {:?})", node.key, node.value));
                    link = &node.next;
                }
                DebugRaw(format!("[{}]", chain.join(" -> ")))
            }))
            .finish()
    }
}
