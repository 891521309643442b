use serde::Serialize;

use crate::algorithm::traits::check_source;
use crate::algorithm::VisitState;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// How the depth-first search keeps track of its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsStrategy {
    /// Heap-allocated stack of `(vertex, remaining neighbors)` frames, no depth limit
    #[default]
    ExplicitStack,
    /// Native recursion, bounded by `max_recursion_depth`
    Recursive,
}

/// Result of a depth-first traversal
///
/// All vectors have length `V + 1`; index 0 is unused. Discovery and finish
/// times come from one clock that ticks on every discovery and every finish.
#[derive(Debug, Clone, Serialize)]
pub struct DepthFirstResult {
    pub visit_state: Vec<VisitState>,
    /// Discoverer of each vertex, `None` for tree roots and unreached vertices
    pub parents: Vec<Option<usize>>,
    pub discovery: Vec<Option<usize>>,
    pub finish: Vec<Option<usize>>,
    /// Vertices in discovery order
    pub order: Vec<usize>,
    pub source: usize,
}

impl DepthFirstResult {
    /// Returns true if the traversal reached `vertex`
    pub fn is_reached(&self, vertex: usize) -> bool {
        matches!(self.visit_state.get(vertex), Some(VisitState::Finished))
    }

    /// Returns the number of vertices visited
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }
}

struct DfsState {
    visit_state: Vec<VisitState>,
    parents: Vec<Option<usize>>,
    discovery: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
    order: Vec<usize>,
    clock: usize,
}

impl DfsState {
    fn new(n: usize) -> Self {
        DfsState {
            visit_state: vec![VisitState::Unvisited; n + 1],
            parents: vec![None; n + 1],
            discovery: vec![None; n + 1],
            finish: vec![None; n + 1],
            order: Vec::with_capacity(n),
            clock: 0,
        }
    }

    fn is_unvisited(&self, vertex: usize) -> bool {
        self.visit_state[vertex] == VisitState::Unvisited
    }

    fn discover(&mut self, vertex: usize) {
        self.clock += 1;
        self.discovery[vertex] = Some(self.clock);
        self.visit_state[vertex] = VisitState::Discovered;
        self.order.push(vertex);
        log::debug!(
            "DF visited vertex {} along edge {:?}--{}",
            vertex,
            self.parents[vertex],
            vertex
        );
    }

    fn finish(&mut self, vertex: usize) {
        self.clock += 1;
        self.finish[vertex] = Some(self.clock);
        self.visit_state[vertex] = VisitState::Finished;
    }

    fn into_result(self, source: usize) -> DepthFirstResult {
        DepthFirstResult {
            visit_state: self.visit_state,
            parents: self.parents,
            discovery: self.discovery,
            finish: self.finish,
            order: self.order,
            source,
        }
    }
}

/// Depth-first traversal
#[derive(Debug, Clone)]
pub struct DepthFirst {
    strategy: DfsStrategy,
    max_recursion_depth: usize,
    full_forest: bool,
}

impl DepthFirst {
    /// Create a new depth-first traversal with the explicit-stack strategy
    pub fn new() -> Self {
        DepthFirst {
            strategy: DfsStrategy::ExplicitStack,
            max_recursion_depth: 10_000,
            full_forest: false,
        }
    }

    /// Set the traversal strategy
    pub fn with_strategy(mut self, strategy: DfsStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the deepest path the recursive strategy may follow
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// After the source tree, also start trees at every still-unvisited vertex
    pub fn with_full_forest(mut self, enabled: bool) -> Self {
        self.full_forest = enabled;
        self
    }

    /// Visits every vertex reachable from `source`
    pub fn traverse<W, G>(&self, graph: &G, source: usize) -> Result<DepthFirstResult>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        check_source::<W, G>(graph, source)?;

        let mut state = DfsState::new(graph.vertex_count());
        self.visit_tree::<W, G>(graph, source, &mut state)?;

        if self.full_forest {
            for root in graph.vertices() {
                if state.is_unvisited(root) {
                    self.visit_tree::<W, G>(graph, root, &mut state)?;
                }
            }
        }

        log::info!(
            "Depth-first traversal from {} visited {} of {} vertices",
            source,
            state.order.len(),
            graph.vertex_count()
        );

        Ok(state.into_result(source))
    }

    fn visit_tree<W, G>(&self, graph: &G, root: usize, state: &mut DfsState) -> Result<()>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        match self.strategy {
            DfsStrategy::ExplicitStack => {
                visit_with_stack::<W, G>(graph, root, state);
                Ok(())
            }
            DfsStrategy::Recursive => visit_recursive::<W, G>(graph, root, state, 1, self.max_recursion_depth),
        }
    }
}

impl Default for DepthFirst {
    fn default() -> Self {
        DepthFirst::new()
    }
}

fn visit_recursive<W, G>(
    graph: &G,
    vertex: usize,
    state: &mut DfsState,
    depth: usize,
    max_depth: usize,
) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if depth > max_depth {
        return Err(Error::RecursionLimit(max_depth));
    }

    state.discover(vertex);
    for (neighbor, _) in graph.neighbors(vertex) {
        if state.is_unvisited(neighbor) {
            state.parents[neighbor] = Some(vertex);
            visit_recursive::<W, G>(graph, neighbor, state, depth + 1, max_depth)?;
        }
    }
    state.finish(vertex);
    Ok(())
}

fn visit_with_stack<W, G>(graph: &G, root: usize, state: &mut DfsState)
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    state.discover(root);
    let mut stack = vec![(root, graph.neighbors(root))];

    while let Some((vertex, neighbors)) = stack.last_mut() {
        let vertex = *vertex;
        let next = neighbors.find(|&(neighbor, _)| state.is_unvisited(neighbor));

        match next {
            Some((neighbor, _)) => {
                state.parents[neighbor] = Some(vertex);
                state.discover(neighbor);
                stack.push((neighbor, graph.neighbors(neighbor)));
            }
            None => {
                state.finish(vertex);
                stack.pop();
            }
        }
    }
}
