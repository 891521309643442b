use std::fmt::{Debug, Display};
use num_traits::PrimInt;

/// Integer edge weight
///
/// Any non-negative value up to `W::max_value()` is a valid weight. Path sums
/// that would exceed `W::max_value()` are treated as unusable, never wrapped.
pub trait Weight: PrimInt + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Debug + Display {}

/// Trait representing a weighted undirected graph with vertices `1..=vertex_count()`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges incident to a vertex, ascending by neighbor id
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns the number of adjacency entries of a vertex (self-loops count twice)
    fn degree(&self, vertex: usize) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the lightest edge between two vertices if one exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Returns an iterator over all vertex ids
    fn vertices(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.vertex_count()
    }
}
