use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;

use super::ChainedHashMap;
use super::chained_hash_map::{Bucket, ChainNode};

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a ChainedHashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }
}

/// A borrowed iterator over the entries of a [`ChainedHashMap`].
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Bucket<K, V>>,
    pub(crate) chain: Option<&'a ChainNode<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain {
                self.chain = node.next.as_deref();
                self.len -= 1;
                return Some((&node.key, &node.value));
            }

            self.chain = self.buckets.next()?.head.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
