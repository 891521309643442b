//! Graph Trees - indexed-heap driven tree growth over undirected weighted graphs
//!
//! This library builds an undirected weighted graph from a plain text edge list
//! and runs four classical algorithms on it: depth-first traversal, breadth-first
//! traversal, Prim's minimum spanning tree and Dijkstra's shortest path tree.
//!
//! Prim and Dijkstra share one frontier loop backed by an indexed binary min-heap
//! whose position array lets an already-queued vertex move up in place when its
//! priority drops, giving O((V + E) log V) running time.
//!
//! Vertices are numbered `1..=V`. Every per-vertex array returned by this crate
//! has length `V + 1` and leaves index 0 unused.

pub mod algorithm;
pub mod data_structures;
pub mod display;
pub mod graph;

pub use algorithm::{
    bfs::{BreadthFirst, BreadthFirstResult},
    dfs::{DepthFirst, DepthFirstResult, DfsStrategy},
    dijkstra::Dijkstra,
    prim::{Prim, SpanningTreeResult},
    ShortestPathAlgorithm, ShortestPathResult, VisitState,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Malformed graph input at line {line}: {message}")]
    GraphParse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extract-min called on an empty heap")]
    EmptyHeap,

    #[error("Heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },

    #[error("Vertex {0} is already in the heap")]
    DuplicateHeapEntry(usize),

    #[error("Heap position array must be zeroed and hold at least capacity + 1 slots")]
    InvalidHeapState,

    #[error("Queue overflow (capacity {capacity})")]
    QueueOverflow { capacity: usize },

    #[error("Dequeue called on an empty queue")]
    QueueUnderflow,

    #[error("Recursion depth limit of {0} exceeded")]
    RecursionLimit(usize),

    #[error("Total tree weight overflowed the weight type")]
    WeightOverflow,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
