use std::fmt::Debug;

use crate::{Error, Result};

/// Array-backed binary min-heap over vertex ids with an external position index
///
/// The heap never owns priorities. Every ordering operation takes the caller's
/// priority slice (indexed by vertex id), so the caller is free to lower
/// `priority[v]` between calls and then ask the heap to restore order with
/// [`IndexedMinHeap::sift_up`].
///
/// The position slice is borrowed from the caller for the lifetime of the heap
/// and kept in sync with the heap array:
/// - `heap[1..=size]` holds distinct vertex ids, `heap[0]` is unused
/// - `position[v] == k` iff `heap[k] == v`, and `position[v] == 0` iff `v` is absent
/// - `priority[heap[k / 2]] <= priority[heap[k]]` for every `k > 1`
#[derive(Debug)]
pub struct IndexedMinHeap<'a> {
    /// Heap array, slot 0 unused
    heap: Vec<usize>,

    /// Number of occupied slots
    size: usize,

    /// Caller-owned back-reference from vertex id to heap slot
    position: &'a mut [usize],
}

impl<'a> IndexedMinHeap<'a> {
    /// Creates an empty heap able to hold `capacity` vertices
    ///
    /// `position` must be zeroed and hold at least `capacity + 1` entries.
    pub fn new(capacity: usize, position: &'a mut [usize]) -> Result<Self> {
        if position.len() < capacity + 1 || position.iter().any(|&slot| slot != 0) {
            return Err(Error::InvalidHeapState);
        }

        Ok(IndexedMinHeap {
            heap: vec![0; capacity + 1],
            size: 0,
            position,
        })
    }

    /// Returns true if no vertex is queued
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the maximum number of vertices the heap can hold
    pub fn capacity(&self) -> usize {
        self.heap.len() - 1
    }

    /// Returns true if `vertex` is currently queued
    pub fn contains(&self, vertex: usize) -> bool {
        self.position_of(vertex).is_some()
    }

    /// Returns the heap slot occupied by `vertex`, if it is queued
    pub fn position_of(&self, vertex: usize) -> Option<usize> {
        match self.position.get(vertex) {
            Some(&slot) if slot != 0 => Some(slot),
            _ => None,
        }
    }

    /// Returns the minimum-priority vertex without removing it
    pub fn peek_min(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.heap[1])
        }
    }

    /// Returns the occupied part of the heap array, root first
    pub fn as_slice(&self) -> &[usize] {
        &self.heap[1..=self.size]
    }

    /// Appends `vertex` at the next free slot and restores order upwards
    pub fn insert<P: Ord>(&mut self, vertex: usize, priority: &[P]) -> Result<()> {
        if vertex == 0 || vertex >= self.position.len() || vertex >= priority.len() {
            return Err(Error::InvalidVertex(vertex));
        }
        if self.position[vertex] != 0 {
            return Err(Error::DuplicateHeapEntry(vertex));
        }
        if self.size == self.capacity() {
            return Err(Error::HeapFull {
                capacity: self.capacity(),
            });
        }

        self.size += 1;
        self.heap[self.size] = vertex;
        self.sift_up(self.size, priority);
        Ok(())
    }

    /// Moves the occupant of slot `k` towards the root while its priority is
    /// strictly smaller than its parent's
    pub fn sift_up<P: Ord>(&mut self, mut k: usize, priority: &[P]) {
        debug_assert!(k >= 1 && k <= self.size, "slot {} out of range", k);
        if k == 0 || k > self.size {
            return;
        }

        let vertex = self.heap[k];
        while k > 1 && priority[vertex] < priority[self.heap[k / 2]] {
            let parent = self.heap[k / 2];
            self.heap[k] = parent;
            self.position[parent] = k;
            k /= 2;
        }
        self.heap[k] = vertex;
        self.position[vertex] = k;
    }

    /// Moves the occupant of slot `k` towards the leaves while a child has a
    /// strictly smaller priority. Ties between children go to the left child.
    pub fn sift_down<P: Ord>(&mut self, mut k: usize, priority: &[P]) {
        debug_assert!(k >= 1 && k <= self.size, "slot {} out of range", k);
        if k == 0 || k > self.size {
            return;
        }

        let vertex = self.heap[k];
        let mut child = 2 * k;
        while child <= self.size {
            if child < self.size && priority[self.heap[child + 1]] < priority[self.heap[child]] {
                child += 1;
            }
            if priority[vertex] <= priority[self.heap[child]] {
                break;
            }
            let smaller = self.heap[child];
            self.heap[k] = smaller;
            self.position[smaller] = k;
            k = child;
            child = 2 * k;
        }
        self.heap[k] = vertex;
        self.position[vertex] = k;
    }

    /// Restores order after the priority of a queued vertex was lowered
    pub fn decrease_key<P: Ord>(&mut self, vertex: usize, priority: &[P]) -> Result<()> {
        let slot = self
            .position_of(vertex)
            .ok_or(Error::InvalidVertex(vertex))?;
        self.sift_up(slot, priority);
        Ok(())
    }

    /// Removes and returns the minimum-priority vertex
    pub fn extract_min<P: Ord>(&mut self, priority: &[P]) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let min = self.heap[1];
        self.position[min] = 0;

        let last = self.heap[self.size];
        self.heap[self.size] = 0;
        self.size -= 1;

        if !self.is_empty() {
            self.heap[1] = last;
            self.position[last] = 1;
            self.sift_down(1, priority);
        }

        Ok(min)
    }

    /// Checks heap order and the position back-references against `priority`
    pub fn is_valid<P: Ord>(&self, priority: &[P]) -> bool {
        for k in 1..=self.size {
            let vertex = self.heap[k];
            if self.position.get(vertex) != Some(&k) {
                return false;
            }
            if k > 1 && priority[self.heap[k / 2]] > priority[vertex] {
                return false;
            }
        }
        self.position.iter().filter(|&&slot| slot != 0).count() == self.size
    }
}
