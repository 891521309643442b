use graph_trees::data_structures::IndexedMinHeap;
use graph_trees::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_heap_extracts_in_priority_order() {
    let priority = vec![0, 50, 20, 90, 10, 70, 30, 60, 40, 80];
    let mut position = vec![0; priority.len()];
    let mut heap = IndexedMinHeap::new(9, &mut position).unwrap();

    for v in 1..=9 {
        heap.insert(v, &priority).unwrap();
        assert!(heap.is_valid(&priority));
    }
    assert_eq!(heap.len(), 9);
    assert_eq!(heap.peek_min(), Some(4));

    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min(&priority).unwrap());
        assert!(heap.is_valid(&priority));
    }

    assert_eq!(extracted, vec![4, 2, 6, 8, 1, 7, 5, 9, 3]);
}

#[test]
fn test_heap_position_tracks_slots() {
    let priority = vec![0, 5, 3, 8, 1];
    let mut position = vec![0; 5];
    {
        let mut heap = IndexedMinHeap::new(4, &mut position).unwrap();
        for v in 1..=4 {
            heap.insert(v, &priority).unwrap();
        }

        for (slot, &v) in heap.as_slice().iter().enumerate() {
            assert_eq!(heap.position_of(v), Some(slot + 1));
        }

        let min = heap.extract_min(&priority).unwrap();
        assert_eq!(min, 4);
        assert!(!heap.contains(4));
        assert_eq!(heap.position_of(4), None);
        assert!(heap.contains(2));
    }
    assert_eq!(position[4], 0);
    assert_eq!(position.iter().filter(|&&p| p != 0).count(), 3);
}

#[test]
fn test_heap_sift_up_after_decrease() {
    let mut priority = vec![0, 10, 20, 30, 40, 50];
    let mut position = vec![0; 6];
    let mut heap = IndexedMinHeap::new(5, &mut position).unwrap();
    for v in 1..=5 {
        heap.insert(v, &priority).unwrap();
    }
    assert_eq!(heap.peek_min(), Some(1));

    // Lower vertex 5 below everything and restore order in place
    priority[5] = 1;
    let slot = heap.position_of(5).unwrap();
    heap.sift_up(slot, &priority);
    assert!(heap.is_valid(&priority));
    assert_eq!(heap.peek_min(), Some(5));
    assert_eq!(heap.position_of(5), Some(1));

    priority[3] = 5;
    heap.decrease_key(3, &priority).unwrap();
    assert!(heap.is_valid(&priority));

    let order: Vec<usize> = (0..5).map(|_| heap.extract_min(&priority).unwrap()).collect();
    assert_eq!(order, vec![5, 3, 1, 2, 4]);
}

#[test]
fn test_heap_sift_down_after_increase() {
    let mut priority = vec![0, 1, 2, 3, 4, 5, 6, 7];
    let mut position = vec![0; 8];
    let mut heap = IndexedMinHeap::new(7, &mut position).unwrap();
    for v in 1..=7 {
        heap.insert(v, &priority).unwrap();
    }

    priority[1] = 100;
    heap.sift_down(1, &priority);
    assert!(heap.is_valid(&priority));
    assert_eq!(heap.peek_min(), Some(2));
}

#[test]
fn test_heap_sift_down_prefers_left_child_on_tie() {
    let priority = vec![0, 1, 5, 5, 9];
    let mut position = vec![0; 5];
    let mut heap = IndexedMinHeap::new(4, &mut position).unwrap();
    for v in 1..=4 {
        heap.insert(v, &priority).unwrap();
    }
    assert_eq!(heap.as_slice(), &[1, 2, 3, 4]);

    assert_eq!(heap.extract_min(&priority).unwrap(), 1);
    assert_eq!(heap.as_slice(), &[2, 4, 3]);
    assert!(heap.is_valid(&priority));
}

#[test]
fn test_heap_sift_down_stops_on_equal_priority() {
    let priority = vec![0, 1, 5, 5];
    let mut position = vec![0; 4];
    let mut heap = IndexedMinHeap::new(3, &mut position).unwrap();
    for v in 1..=3 {
        heap.insert(v, &priority).unwrap();
    }

    assert_eq!(heap.extract_min(&priority).unwrap(), 1);
    assert_eq!(heap.as_slice(), &[3, 2]);
    assert!(heap.is_valid(&priority));
}

#[test]
fn test_heap_extract_from_empty_fails() {
    let priority = vec![0u32; 3];
    let mut position = vec![0; 3];
    let mut heap = IndexedMinHeap::new(2, &mut position).unwrap();

    assert!(heap.is_empty());
    assert!(matches!(heap.extract_min(&priority), Err(Error::EmptyHeap)));

    heap.insert(1, &priority).unwrap();
    assert_eq!(heap.extract_min(&priority).unwrap(), 1);
    assert!(matches!(heap.extract_min(&priority), Err(Error::EmptyHeap)));
}

#[test]
fn test_heap_rejects_contract_violations() {
    let priority = vec![0u32, 4, 2, 7];
    let mut position = vec![0; 4];
    let mut heap = IndexedMinHeap::new(2, &mut position).unwrap();

    heap.insert(1, &priority).unwrap();
    assert!(matches!(heap.insert(1, &priority), Err(Error::DuplicateHeapEntry(1))));
    assert!(matches!(heap.insert(0, &priority), Err(Error::InvalidVertex(0))));
    assert!(matches!(heap.insert(9, &priority), Err(Error::InvalidVertex(9))));

    heap.insert(2, &priority).unwrap();
    assert!(matches!(heap.insert(3, &priority), Err(Error::HeapFull { capacity: 2 })));
    assert!(heap.is_valid(&priority));
}

#[test]
fn test_heap_requires_clean_position_array() {
    let mut short = vec![0; 2];
    assert!(matches!(
        IndexedMinHeap::new(5, &mut short),
        Err(Error::InvalidHeapState)
    ));

    let mut dirty = vec![0, 0, 3, 0];
    assert!(matches!(
        IndexedMinHeap::new(3, &mut dirty),
        Err(Error::InvalidHeapState)
    ));
}

#[test]
fn test_heap_invariant_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 200;
    let mut priority: Vec<u64> = (0..=n).map(|_| rng.gen_range(0..1_000)).collect();
    let mut position = vec![0; n + 1];
    let mut heap = IndexedMinHeap::new(n, &mut position).unwrap();

    let mut last_extracted: Option<u64> = None;
    for _ in 0..5_000 {
        let v = rng.gen_range(1..=n);
        match rng.gen_range(0..3) {
            0 => {
                if !heap.contains(v) {
                    // a freshly inserted vertex must not undercut what was already extracted
                    priority[v] = last_extracted.unwrap_or(0) + rng.gen_range(0..500);
                    heap.insert(v, &priority).unwrap();
                }
            }
            1 => {
                if let Some(slot) = heap.position_of(v) {
                    let floor = last_extracted.unwrap_or(0);
                    if priority[v] > floor {
                        priority[v] = rng.gen_range(floor..priority[v]);
                    }
                    heap.sift_up(slot, &priority);
                }
            }
            _ => {
                if !heap.is_empty() {
                    let min = heap.extract_min(&priority).unwrap();
                    if let Some(previous) = last_extracted {
                        assert!(priority[min] >= previous);
                    }
                    last_extracted = Some(priority[min]);
                }
            }
        }
        assert!(heap.is_valid(&priority));
    }
}

#[test]
fn test_heap_random_extraction_is_sorted() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 1_000;
    let priority: Vec<i64> = (0..=n).map(|_| rng.gen_range(-10_000..10_000)).collect();
    let mut position = vec![0; n + 1];
    let mut heap = IndexedMinHeap::new(n, &mut position).unwrap();

    for v in 1..=n {
        heap.insert(v, &priority).unwrap();
    }

    let extracted: Vec<i64> = (0..n)
        .map(|_| priority[heap.extract_min(&priority).unwrap()])
        .collect();

    let mut expected: Vec<i64> = priority[1..].to_vec();
    expected.sort();
    assert_eq!(extracted, expected);
    assert!(heap.is_empty());
}
