pub mod circular_queue;
pub mod indexed_heap;

pub use circular_queue::CircularQueue;
pub use indexed_heap::IndexedMinHeap;
