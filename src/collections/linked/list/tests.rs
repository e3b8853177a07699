#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{InvalidPosition, ListError};

fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_positions() {
    let mut list = LinkedList::new();
    for i in 0..3 {
        list.push(1, i).expect("head push");
    }
    assert_eq!(contents(&list), [2, 1, 0], "Head pushes should reverse order.");

    for i in 0..3 {
        list.push(list.len() + 1, i).expect("tail push");
    }
    assert_eq!(contents(&list), [2, 1, 0, 0, 1, 2]);

    list.push(1, 7).expect("head push");
    list.push(2, 8).expect("middle push");
    list.push(5, 9).expect("middle push");
    assert_eq!(contents(&list), [7, 8, 2, 1, 9, 0, 0, 1, 2]);
    assert_eq!(list.front(), Some(&7));
    assert_eq!(list.back(), Some(&2));
    list.verify_links();
}

#[test]
fn test_push_invalid_position() {
    let mut list: LinkedList<_> = (0..3).collect();

    assert_eq!(
        list.push(0, 10),
        Err(ListError::InvalidPosition(InvalidPosition { pos: 0, len: 3 })),
        "Positions are 1-based, so 0 should be rejected."
    );
    assert_eq!(
        list.push(5, 10),
        Err(ListError::InvalidPosition(InvalidPosition { pos: 5, len: 3 })),
    );
    assert_eq!(contents(&list), [0, 1, 2]);
    list.verify_links();
}

#[test]
fn test_pop_positions() {
    let mut list: LinkedList<_> = (1..=6).collect();

    assert_eq!(list.pop(1), Ok(1), "Popping position 1 should remove the head.");
    assert_eq!(list.pop(list.len()), Ok(6), "Popping the last position should remove the tail.");
    assert_eq!(list.back(), Some(&5), "The tail should move back to the new last node.");
    list.verify_links();

    assert_eq!(list.pop(2), Ok(3));
    assert_eq!(contents(&list), [2, 4, 5]);
    list.verify_links();

    assert!(list.pop(4).is_err());
    assert!(list.pop(0).is_err());

    list.push_back(6);
    assert_eq!(contents(&list), [2, 4, 5, 6], "Pushing after a tail pop should use the new tail.");
    list.verify_links();
}

#[test]
fn test_pop_until_empty() {
    let mut list: LinkedList<_> = (0..4).collect();

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    list.verify_links();

    list.push_back(10);
    assert_eq!(list.front(), list.back(), "A single node should be both head and tail.");
    list.verify_links();
}

#[test]
fn test_push_pop_round_trip() {
    let mut list: LinkedList<_> = (0..6).collect();
    let before = list.clone();

    list.push(4, 100).expect("middle push");
    assert_eq!(list.get(4), Ok(&100));
    assert_eq!(list.pop(4), Ok(100));
    assert_eq!(list, before, "Pushing then popping should restore the original order.");
}

#[test]
fn test_iter_mut() {
    let mut list: LinkedList<_> = (1..=4).collect();
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(contents(&list), [10, 20, 30, 40]);
    assert_eq!(list.position_of(&30), Some(3));
    assert!(!list.contains(&1));

    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30, 40]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list = LinkedList::new();
    for i in 0..10 {
        list.push((i / 2) + 1, counter.clone()).expect("valid position");
    }

    drop(list.pop(5));
    assert_eq!(counter.count(), 1);

    drop(list);
    assert_eq!(counter.count(), 10, "Every node should be released exactly once.");
}

#[test]
fn test_display() {
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!(format!("{list}"), "<1 -> 2 -> 3>");
    assert_eq!(
        format!("{list:?}"),
        "LinkedList { contents: [1, 2, 3], head: Some(1), tail: Some(3), len: 3 }"
    );
}
