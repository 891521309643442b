use crate::algorithm::frontier::{grow_tree, PathLength};
use crate::algorithm::traits::check_source;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm over an indexed min-heap
///
/// Requires non-negative weights. An edge whose relaxed distance would overflow
/// the weight type is never taken.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_source::<W, G>(graph, source)?;

        let growth = grow_tree::<W, G, _>(graph, source, &PathLength)?;
        let distances = growth.finalized_keys();

        log::info!(
            "Dijkstra from {} reached {} of {} vertices ({} relaxations, {} decrease-keys)",
            source,
            growth.order.len(),
            graph.vertex_count(),
            growth.stats.relaxations,
            growth.stats.decrease_keys
        );

        Ok(ShortestPathResult {
            distances,
            predecessors: growth.parents,
            source,
        })
    }
}
