use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// An undirected graph implementation using sorted adjacency lists
///
/// Every edge is stored in both endpoints' lists. A self-loop `(u, u, w)` is
/// therefore stored twice in `adj[u]`. Lists stay sorted by neighbor id, and
/// parallel edges keep their insertion order.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of undirected edges added
    edge_count: usize,

    /// Adjacency lists indexed by vertex id: vertex -> [(neighbor, weight)], slot 0 unused
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with vertices `1..=vertices` and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        UndirectedGraph {
            vertex_count: vertices,
            edge_count: 0,
            adjacency: vec![Vec::new(); vertices + 1],
        }
    }

    /// Adds an undirected edge, keeping both adjacency lists sorted
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        if !self.has_vertex(u) {
            return Err(Error::InvalidVertex(u));
        }
        if !self.has_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_string()));
        }

        Self::insert_sorted(&mut self.adjacency[u], v, weight);
        Self::insert_sorted(&mut self.adjacency[v], u, weight);
        self.edge_count += 1;
        Ok(())
    }

    fn insert_sorted(list: &mut Vec<(usize, W)>, neighbor: usize, weight: W) {
        let at = list.partition_point(|&(existing, _)| existing <= neighbor);
        list.insert(at, (neighbor, weight));
    }

    /// Returns the adjacency list of a vertex, ascending by neighbor id
    pub fn adjacency(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every undirected edge once as `(u, v, weight)` with `u <= v`
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in self.vertices() {
            let mut self_loop_seen = false;
            for &(v, weight) in &self.adjacency[u] {
                if u < v {
                    edges.push((u, v, weight));
                } else if u == v {
                    // each self-loop occupies two consecutive entries
                    if self_loop_seen {
                        edges.push((u, v, weight));
                    }
                    self_loop_seen = !self_loop_seen;
                }
            }
        }
        edges
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|&(_, weight)| weight >= W::zero())
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.adjacency(vertex).iter().copied())
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adjacency(vertex).len()
    }
}
