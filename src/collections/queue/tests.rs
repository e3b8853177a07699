#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_circular_usable_cap() {
    let mut queue = CircularQueue::with_cap(10).expect("small allocation");
    for i in 1..10 {
        queue.enqueue(i).expect("within usable capacity");
    }

    assert!(queue.is_full());
    assert_eq!(queue.len(), queue.usable_cap(), "One slot should always be kept free.");
    assert_eq!(queue.enqueue(10), Err(QueueFull { cap: 10 }));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), (1..10).collect::<Vec<_>>());
}

#[test]
fn test_circular_wrapping() {
    let mut queue = CircularQueue::with_cap(4).expect("small allocation");

    for round in 0..5 {
        for i in 0..3 {
            queue.enqueue(round * 10 + i).expect("within usable capacity");
        }
        for i in 0..3 {
            assert_eq!(queue.dequeue(), Some(round * 10 + i), "Elements should leave in FIFO order.");
        }
        assert!(queue.is_empty());
        assert!(queue.front_index() < queue.cap(), "Indices should wrap rather than grow.");
        assert_eq!(queue.front_index(), queue.rear_index());
    }

    assert_eq!(queue.cap(), 4, "A CircularQueue should never grow.");
}

#[test]
fn test_circular_dequeue_empty() {
    let mut queue: CircularQueue<u8> = CircularQueue::with_cap(3).expect("small allocation");
    assert_eq!(queue.dequeue(), None, "Dequeuing an empty queue should be a no-op.");
    assert_eq!(queue.front_index(), 0);
    assert_eq!(queue.rear_index(), 0);
    assert_eq!(queue.front(), None);

    queue.enqueue(1).expect("within usable capacity");
    assert_eq!(queue.front(), Some(&1));
}

#[test]
fn test_circular_default_cap() {
    let queue: CircularQueue<u8> = CircularQueue::with_cap(0).expect("small allocation");
    assert_eq!(queue.cap(), 10);
    assert_eq!(queue.usable_cap(), 9);
}

#[test]
fn test_circular_debug() {
    let mut queue = CircularQueue::with_cap(3).expect("small allocation");
    queue.enqueue(1).expect("within usable capacity");
    queue.enqueue(2).expect("within usable capacity");
    queue.dequeue();
    queue.enqueue(3).expect("within usable capacity");

    assert_eq!(
        format!("{queue:?}"),
        "CircularQueue { contents: [2, 3], front: 1, rear: 0, len: 2, cap: 3 }"
    );
}

#[test]
fn test_linked_queue_debug() {
    let mut queue = LinkedQueue::new();
    assert_eq!(format!("{queue:?}"), "LinkedQueue { contents: [], front: None, rear: None, len: 0 }");

    for c in ['a', 'b', 'c'] {
        queue.enqueue(c);
    }
    queue.dequeue().expect("non-empty");

    assert_eq!(
        format!("{queue:?}"),
        "LinkedQueue { contents: ['b', 'c'], front: Some('b'), rear: Some('c'), len: 2 }"
    );
}

#[test]
fn test_linked_queue_order() {
    let mut queue = LinkedQueue::new();
    assert_eq!(queue.dequeue(), Err(QueueEmpty));
    assert_eq!(queue.front(), Err(QueueEmpty));

    for i in 1..=3 {
        queue.enqueue(i);
    }
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.rear(), Ok(&3));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(4);
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert_eq!(queue.dequeue(), Ok(4));
    assert!(queue.is_empty());
    assert_eq!(queue.rear(), Err(QueueEmpty), "An empty queue should have no rear either.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut circular = CircularQueue::with_cap(5).expect("small allocation");
    let mut linked = LinkedQueue::new();
    for _ in 0..4 {
        circular.enqueue(counter.clone()).expect("within usable capacity");
        linked.enqueue(counter.clone());
    }

    drop(circular.dequeue());
    drop(linked.dequeue());
    assert_eq!(counter.count(), 2);

    drop(circular);
    drop(linked);
    assert_eq!(counter.count(), 8, "Both queues should release every element.");
}
