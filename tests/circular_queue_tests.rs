use graph_trees::data_structures::CircularQueue;
use graph_trees::Error;

#[test]
fn test_queue_is_fifo_across_wraparound() {
    let mut queue = CircularQueue::with_capacity(3);
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 1);

    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.peek(), Some(2));

    let drained: Vec<usize> = (0..3).map(|_| queue.dequeue().unwrap()).collect();
    assert_eq!(drained, vec![2, 3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn test_queue_overflow_and_underflow_are_distinct() {
    let mut queue = CircularQueue::with_capacity(1);
    assert!(matches!(queue.dequeue(), Err(Error::QueueUnderflow)));

    queue.enqueue(7).unwrap();
    assert!(matches!(queue.enqueue(8), Err(Error::QueueOverflow { capacity: 1 })));

    // The rejected item was not stored
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue().unwrap(), 7);
    assert!(matches!(queue.dequeue(), Err(Error::QueueUnderflow)));
}

#[test]
fn test_queue_grow_keeps_order() {
    let mut queue = CircularQueue::with_capacity(4);
    for item in 1..=4 {
        queue.enqueue(item).unwrap();
    }
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(5).unwrap();
    queue.enqueue(6).unwrap();
    assert!(queue.is_full());

    queue.grow();
    assert_eq!(queue.capacity(), 8);
    queue.enqueue(7).unwrap();

    let drained: Vec<usize> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_zero_capacity_queue_can_grow() {
    let mut queue = CircularQueue::with_capacity(0);
    assert!(matches!(queue.enqueue(1), Err(Error::QueueOverflow { capacity: 0 })));

    queue.grow();
    queue.enqueue(1).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 1);
}

#[test]
fn test_default_queue_capacity() {
    let queue = CircularQueue::default();
    assert_eq!(queue.capacity(), 10);
    assert!(queue.is_empty());
}
