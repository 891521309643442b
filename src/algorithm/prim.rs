use serde::Serialize;

use crate::algorithm::frontier::{grow_tree, ConnectionCost};
use crate::algorithm::traits::check_source;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of Prim's algorithm
///
/// Only the connected component of the source is spanned. Vertices outside it
/// keep `parents[v] == None` and `connection_costs[v] == None` and contribute
/// nothing to `total_weight`; this partial result is not reported as an error,
/// so check [`SpanningTreeResult::is_spanning`] before treating it as a spanning
/// tree of the whole graph. All vectors have length `V + 1`, index 0 unused.
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTreeResult<W>
where
    W: Weight,
{
    /// Tree parent of each vertex, `None` for the source and unreached vertices
    pub parents: Vec<Option<usize>>,

    /// Weight of the edge that attached each vertex to the tree (0 for the source)
    pub connection_costs: Vec<Option<W>>,

    /// Sum of the weights of all tree edges
    pub total_weight: W,

    /// Vertices in the order they joined the tree
    pub order: Vec<usize>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> SpanningTreeResult<W>
where
    W: Weight,
{
    /// Tree edges as `(parent, child, weight)` in the order the children joined
    pub fn tree_edges(&self) -> Vec<(usize, usize, W)> {
        self.order
            .iter()
            .filter_map(|&v| match (self.parents[v], self.connection_costs[v]) {
                (Some(parent), Some(weight)) => Some((parent, v, weight)),
                _ => None,
            })
            .collect()
    }

    /// Returns the number of vertices in the tree, the source included
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tree covers every vertex of the graph
    pub fn is_spanning(&self) -> bool {
        self.order.len() + 1 == self.parents.len()
    }
}

/// Prim's minimum spanning tree over an indexed min-heap
#[derive(Debug, Default)]
pub struct Prim;

impl Prim {
    /// Creates a new Prim algorithm instance
    pub fn new() -> Self {
        Prim
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Prim"
    }

    /// Builds the minimum spanning tree of the component containing `source`
    pub fn compute_spanning_tree<W, G>(&self, graph: &G, source: usize) -> Result<SpanningTreeResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        check_source::<W, G>(graph, source)?;

        let growth = grow_tree::<W, G, _>(graph, source, &ConnectionCost)?;
        let connection_costs = growth.finalized_keys();

        let total_weight = connection_costs
            .iter()
            .flatten()
            .try_fold(W::zero(), |sum, &cost| sum.checked_add(&cost))
            .ok_or(Error::WeightOverflow)?;

        if growth.order.len() < graph.vertex_count() {
            log::info!(
                "Prim from {} spans only {} of {} vertices, graph is disconnected",
                source,
                growth.order.len(),
                graph.vertex_count()
            );
        }
        log::info!(
            "Prim from {} built a tree of weight {} ({} relaxations, {} decrease-keys)",
            source,
            total_weight,
            growth.stats.relaxations,
            growth.stats.decrease_keys
        );

        Ok(SpanningTreeResult {
            parents: growth.parents,
            connection_costs,
            total_weight,
            order: growth.order,
            source,
        })
    }
}
