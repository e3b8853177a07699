#![cfg(test)]

use super::*;
use crate::collections::hash::{ByteSumState, TableConfig};
use crate::util::alloc::CountedDrop;
use crate::util::error::{InvalidLoadFactor, TableError};
use crate::util::hash::ManualState;

/// Keys in the chain at `index`, front to back.
fn chain_keys<V>(map: &ChainedHashMap<u64, V, ManualState>, index: usize) -> Vec<u64> {
    let mut keys = Vec::new();
    let mut link = &map.buckets[index].head;
    while let Some(node) = link {
        keys.push(node.key);
        link = &node.next;
    }
    keys
}

#[test]
fn test_resize_threshold() {
    let mut map: ChainedHashMap<i32, i32> = ChainedHashMap::with_cap(5).expect("small allocation");

    for i in 1..=3 {
        map.insert(i, i * 10).expect("no resize needed");
    }
    assert_eq!(map.cap(), 5, "A load factor of 0.6 is below the default threshold.");
    assert_eq!(map.load_factor(), 0.6);

    map.insert(4, 40).expect("resize");
    assert_eq!(map.cap(), 10, "A 4th key would reach 0.8, so the buckets should double first.");
    assert_eq!(map.load_factor(), 0.4);
    for i in 1..=4 {
        assert_eq!(map.get(&i), Some(&(i * 10)), "Every key should survive the resize.");
    }

    map.insert(4, 400).expect("update");
    assert_eq!(map.cap(), 10, "Updating a key should never resize.");
}

#[test]
fn test_update_in_place() {
    let mut map = ChainedHashMap::with_cap_and_hasher(4, ManualState).expect("small allocation");
    map.insert(1_u64, "a").expect("insert");
    map.insert(5, "b").expect("insert");

    assert_eq!(map.insert(1, "c"), Ok(Some("a")));
    assert_eq!(map.len(), 2, "Updating a key shouldn't add an entry.");
    assert_eq!(chain_keys(&map, 1), [5, 1], "Updating a key shouldn't move its node.");
    assert_eq!(map.get(&1), Some(&"c"));

    *map.get_mut(&5).expect("present") = "d";
    assert_eq!(map.get_entry(&5), Some((&5, &"d")));
}

#[test]
fn test_collisions() {
    let mut map = ChainedHashMap::with_cap_and_hasher(8, ManualState).expect("small allocation");
    for key in [1_u64, 9, 17] {
        map.insert(key, key * 2).expect("no resize needed");
    }

    assert_eq!(chain_keys(&map, 1), [17, 9, 1], "New keys should be prepended to the chain.");
    assert_eq!(map.bucket_lens().collect::<Vec<_>>(), [0, 3, 0, 0, 0, 0, 0, 0]);
    assert_eq!(map.occupied_buckets(), 1);
    for key in [1, 9, 17] {
        assert_eq!(map.get(&key), Some(&(key * 2)));
    }
    assert!(!map.contains(&25), "A colliding key that was never inserted shouldn't be found.");

    let mut anagrams = ChainedHashMap::with_cap_and_hasher(8, ByteSumState).expect("small allocation");
    anagrams.insert("ab", 1).expect("insert");
    anagrams.insert("ba", 2).expect("insert");
    assert_eq!(anagrams.occupied_buckets(), 1, "Anagrams should share a bucket under a byte sum.");
    assert_eq!(anagrams.get("ab"), Some(&1));
    assert_eq!(anagrams.get("ba"), Some(&2));
}

#[test]
fn test_remove_from_chain() {
    let mut map = ChainedHashMap::with_cap_and_hasher(8, ManualState).expect("small allocation");
    for key in [1_u64, 9, 17, 2] {
        map.insert(key, ()).expect("no resize needed");
    }

    assert_eq!(map.remove(&9), Some(()), "Removing from the middle of a chain should relink it.");
    assert_eq!(chain_keys(&map, 1), [17, 1]);
    assert_eq!(map.remove_entry(&1), Some((1, ())));
    assert_eq!(chain_keys(&map, 1), [17]);
    assert_eq!(map.remove(&17), Some(()));
    assert_eq!(chain_keys(&map, 1), []);

    assert_eq!(map.remove(&17), None, "Removing a missing key should do nothing.");
    assert_eq!(map.remove(&3), None);
    assert_eq!(map.len(), 1);
    assert_eq!(map.bucket_lens().sum::<usize>(), map.len());
    assert_eq!(map.cap(), 8, "Removing should never shrink the map.");
}

#[test]
fn test_resize_relinks() {
    let mut map = ChainedHashMap::with_hasher(ManualState);
    assert_eq!(map.cap(), 0);
    assert_eq!(map.get(&0_u64), None, "Lookups without buckets should find nothing.");

    for key in 0..40_u64 {
        map.insert(key, key).expect("growth");
        assert!(map.load_factor() <= 1.0);
    }
    assert_eq!(map.cap(), 64);

    for index in 0..map.cap() {
        for key in chain_keys(&map, index) {
            assert_eq!(key as usize % map.cap(), index, "Every node should be in its home bucket.");
        }
    }
    assert_eq!(map.bucket_lens().sum::<usize>(), 40);

    map.resize(3).expect("small allocation");
    assert_eq!(map.cap(), 3, "An explicit resize may exceed the load factor.");
    assert_eq!(map.iter().count(), 40);
    assert!((0..40).all(|key| map.get(&key) == Some(&key)));
}

#[test]
fn test_custom_load_factor() {
    let config = TableConfig::new().with_load_factor(2.0);
    let mut map = ChainedHashMap::from_parts(2, config, ManualState).expect("valid config");

    for key in 0..3_u64 {
        map.insert(key, ()).expect("no resize needed");
    }
    assert_eq!(map.cap(), 2, "Chains should hold fewer than twice as many entries as buckets.");

    map.insert(3, ()).expect("resize");
    assert_eq!(map.cap(), 4);

    let result = ChainedHashMap::<u64, (), _>::from_parts(2, config.with_load_factor(0.0), ManualState);
    assert_eq!(
        result.err(),
        Some(TableError::InvalidLoadFactor(InvalidLoadFactor { load_factor: 0.0 }))
    );
}

#[test]
fn test_iter() {
    let mut map: ChainedHashMap<u32, char> = ChainedHashMap::new();
    for (i, c) in "abcdef".chars().enumerate() {
        map.insert(i as u32, c).expect("growth");
    }

    let mut entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable();
    assert_eq!(entries, [(0, 'a'), (1, 'b'), (2, 'c'), (3, 'd'), (4, 'e'), (5, 'f')]);
    assert_eq!(map.iter().len(), 6);

    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, [0, 1, 2, 3, 4, 5]);
    assert_eq!(map.values().collect::<String>().len(), 6);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.occupied_buckets(), 0);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut map = ChainedHashMap::with_cap_and_hasher(2, ManualState).expect("small allocation");
    for key in 0..20_u64 {
        map.insert(key, counter.clone()).expect("growth");
    }
    assert_eq!(counter.count(), 0, "Resizing should move nodes, not drop them.");

    drop(map.insert(3, counter.clone()));
    assert_eq!(counter.count(), 1, "Replacing a value should hand back the old one.");

    drop(map.remove(&7));
    assert_eq!(counter.count(), 2);

    drop(map);
    assert_eq!(counter.count(), 21, "Every value should be dropped exactly once.");
}

#[test]
fn test_debug() {
    let config = TableConfig::new().with_load_factor(1.0);
    let mut map = ChainedHashMap::from_parts(4, config, ManualState).expect("valid config");
    map.insert(1_u64, "a").expect("insert");
    map.insert(5, "b").expect("insert");
    map.insert(2, "c").expect("insert");

    assert_eq!(
        format!("{map:?}"),
        r#"ChainedHashMap { buckets: [[], [(5: "b") -> (1: "a")], [(2: "c")], []], len: 3, cap: 4 }"#
    );
    assert_eq!(format!("{map}"), r#"#{5: "b", 1: "a", 2: "c"}"#);
}
