use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Tri-state visit marker used by the traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitState {
    /// Not reached yet
    Unvisited,
    /// Reached, neighbors still being processed
    Discovered,
    /// Reached and all neighbors processed
    Finished,
}

/// Result of a shortest path algorithm execution
///
/// Both vectors have length `V + 1`; index 0 is unused.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` if unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree, `None` for the source and unreachable vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        matches!(self.distances.get(vertex), Some(Some(_)))
    }

    /// Returns the number of vertices reached, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        // Build path in reverse order
        while current != result.source {
            match result.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    log::warn!("Vertex {} has no predecessor but is not the source", current);
                    return None;
                }
            }
            path.push(current);

            if path.len() > result.predecessors.len() {
                log::warn!("Path length exceeds graph size, predecessor cycle at {}", current);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Rejects source vertices outside `1..=V`
pub(crate) fn check_source<W, G>(graph: &G, source: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::SourceNotFound(source))
    }
}
