use serde::Serialize;

use crate::algorithm::traits::check_source;
use crate::algorithm::VisitState;
use crate::data_structures::CircularQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a breadth-first traversal
///
/// All vectors have length `V + 1`; index 0 is unused.
#[derive(Debug, Clone, Serialize)]
pub struct BreadthFirstResult {
    pub visit_state: Vec<VisitState>,
    /// Discoverer of each vertex, `None` for the source and unreached vertices
    pub parents: Vec<Option<usize>>,
    /// Minimum number of edges from the source, `None` if unreachable
    pub depth: Vec<Option<usize>>,
    /// Vertices in dequeue order
    pub order: Vec<usize>,
    pub source: usize,
}

impl BreadthFirstResult {
    /// Returns true if the traversal reached `vertex`
    pub fn is_reached(&self, vertex: usize) -> bool {
        matches!(self.depth.get(vertex), Some(Some(_)))
    }

    /// Returns the number of vertices visited
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }
}

/// Breadth-first traversal over a bounded circular queue
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    /// Queue size, the vertex count when unset
    queue_capacity: Option<usize>,
    /// Whether a full queue doubles instead of failing
    auto_resize: bool,
}

impl BreadthFirst {
    /// Create a new breadth-first traversal with a queue sized to the graph
    pub fn new() -> Self {
        BreadthFirst {
            queue_capacity: None,
            auto_resize: true,
        }
    }

    /// Set a fixed initial queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Enable or disable growing the queue when it overflows
    pub fn with_auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = enabled;
        self
    }

    /// Visits every vertex reachable from `source` in order of hop count
    pub fn traverse<W, G>(&self, graph: &G, source: usize) -> Result<BreadthFirstResult>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        check_source::<W, G>(graph, source)?;

        let n = graph.vertex_count();
        let mut visit_state = vec![VisitState::Unvisited; n + 1];
        let mut parents: Vec<Option<usize>> = vec![None; n + 1];
        let mut depth: Vec<Option<usize>> = vec![None; n + 1];
        let mut order = Vec::with_capacity(n);

        let mut queue = CircularQueue::with_capacity(self.queue_capacity.unwrap_or(n));

        visit_state[source] = VisitState::Discovered;
        depth[source] = Some(0);
        self.enqueue(&mut queue, source)?;

        while !queue.is_empty() {
            let vertex = queue.dequeue()?;
            order.push(vertex);
            log::debug!(
                "BF visited vertex {} along edge {:?}--{}",
                vertex,
                parents[vertex],
                vertex
            );

            let next_depth = depth[vertex].map(|d| d + 1);
            for (neighbor, _) in graph.neighbors(vertex) {
                if visit_state[neighbor] == VisitState::Unvisited {
                    visit_state[neighbor] = VisitState::Discovered;
                    depth[neighbor] = next_depth;
                    parents[neighbor] = Some(vertex);
                    self.enqueue(&mut queue, neighbor)?;
                }
            }
            visit_state[vertex] = VisitState::Finished;
        }

        log::info!(
            "Breadth-first traversal from {} visited {} of {} vertices",
            source,
            order.len(),
            n
        );

        Ok(BreadthFirstResult {
            visit_state,
            parents,
            depth,
            order,
            source,
        })
    }

    fn enqueue(&self, queue: &mut CircularQueue, vertex: usize) -> Result<()> {
        match queue.enqueue(vertex) {
            Err(Error::QueueOverflow { .. }) if self.auto_resize => {
                queue.grow();
                queue.enqueue(vertex)
            }
            other => other,
        }
    }
}

impl Default for BreadthFirst {
    fn default() -> Self {
        BreadthFirst::new()
    }
}
