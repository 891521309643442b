use crate::{Error, Result};

/// Bounded FIFO ring buffer of vertex ids
///
/// A full queue rejects `enqueue` with [`Error::QueueOverflow`] and an empty one
/// rejects `dequeue` with [`Error::QueueUnderflow`]; nothing is dropped silently.
/// Callers that prefer growth over failure call [`CircularQueue::grow`].
#[derive(Debug, Clone)]
pub struct CircularQueue {
    buffer: Vec<usize>,
    front: usize,
    back: usize,
    size: usize,
}

impl CircularQueue {
    /// Creates an empty queue holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        CircularQueue {
            buffer: vec![0; capacity],
            front: 0,
            back: 0,
            size: 0,
        }
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the next `enqueue` would overflow
    pub fn is_full(&self) -> bool {
        self.size == self.buffer.len()
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the maximum number of items
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Adds `item` at the back of the queue
    pub fn enqueue(&mut self, item: usize) -> Result<()> {
        if self.is_full() {
            return Err(Error::QueueOverflow {
                capacity: self.capacity(),
            });
        }

        self.buffer[self.back] = item;
        self.back = (self.back + 1) % self.buffer.len();
        self.size += 1;
        Ok(())
    }

    /// Removes the item at the front of the queue
    pub fn dequeue(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::QueueUnderflow);
        }

        let item = self.buffer[self.front];
        self.front = (self.front + 1) % self.buffer.len();
        self.size -= 1;
        Ok(item)
    }

    /// Returns the item at the front of the queue without removing it
    pub fn peek(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer[self.front])
        }
    }

    /// Doubles the capacity, keeping queued items in FIFO order
    pub fn grow(&mut self) {
        let new_capacity = (self.capacity() * 2).max(1);
        let mut buffer = Vec::with_capacity(new_capacity);
        for i in 0..self.size {
            buffer.push(self.buffer[(self.front + i) % self.buffer.len()]);
        }
        buffer.resize(new_capacity, 0);

        log::debug!("Queue grown from {} to {} slots", self.capacity(), new_capacity);

        self.buffer = buffer;
        self.front = 0;
        self.back = self.size % new_capacity;
    }
}

impl Default for CircularQueue {
    fn default() -> Self {
        CircularQueue::with_capacity(10)
    }
}
