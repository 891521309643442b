//! Frontier growth shared by Prim and Dijkstra
//!
//! Both algorithms grow a tree from the source by repeatedly extracting the
//! cheapest frontier vertex from an [`IndexedMinHeap`] and relaxing its edges.
//! They differ only in the key a neighbor is offered through an edge, which is
//! what [`RelaxationRule`] captures.

use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Weight};
use crate::Result;

/// How an edge `(v, u, weight)` prices `u` once `v` has joined the tree
pub(crate) trait RelaxationRule<W: Weight> {
    /// Name used in log output
    const NAME: &'static str;

    /// Key offered to `u`, or `None` if the edge cannot improve it
    fn candidate(&self, key_v: W, weight: W) -> Option<W>;
}

/// Prim: a vertex costs the cheapest edge linking it to the tree
pub(crate) struct ConnectionCost;

impl<W: Weight> RelaxationRule<W> for ConnectionCost {
    const NAME: &'static str = "Prim";

    fn candidate(&self, _key_v: W, weight: W) -> Option<W> {
        Some(weight)
    }
}

/// Dijkstra: a vertex costs the length of the best path from the source
pub(crate) struct PathLength;

impl<W: Weight> RelaxationRule<W> for PathLength {
    const NAME: &'static str = "Dijkstra";

    fn candidate(&self, key_v: W, weight: W) -> Option<W> {
        key_v.checked_add(&weight)
    }
}

/// Counters collected while growing a tree
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FrontierStats {
    pub extractions: usize,
    pub relaxations: usize,
    pub inserts: usize,
    pub decrease_keys: usize,
}

/// Final state of a frontier run, all vectors of length `V + 1`
#[derive(Debug)]
pub(crate) struct TreeGrowth<W> {
    /// Final key per vertex, meaningless where `in_tree` is false
    pub keys: Vec<W>,
    pub parents: Vec<Option<usize>>,
    pub in_tree: Vec<bool>,
    /// Vertices in extraction order
    pub order: Vec<usize>,
    pub stats: FrontierStats,
}

impl<W: Weight> TreeGrowth<W> {
    /// Keys of vertices that joined the tree, `None` elsewhere
    pub fn finalized_keys(&self) -> Vec<Option<W>> {
        self.keys
            .iter()
            .zip(&self.in_tree)
            .map(|(&key, &joined)| if joined { Some(key) } else { None })
            .collect()
    }
}

/// Grows a tree from `source` under `rule`
///
/// The caller has already checked that `source` is a vertex of `graph`.
pub(crate) fn grow_tree<W, G, R>(graph: &G, source: usize, rule: &R) -> Result<TreeGrowth<W>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
    R: RelaxationRule<W>,
{
    let n = graph.vertex_count();

    // `reached` marks a real key, so any weight up to `W::max_value()` is usable
    let mut keys = vec![W::max_value(); n + 1];
    let mut reached = vec![false; n + 1];
    let mut parents: Vec<Option<usize>> = vec![None; n + 1];
    let mut in_tree = vec![false; n + 1];
    let mut position = vec![0; n + 1];
    let mut order = Vec::with_capacity(n);
    let mut stats = FrontierStats::default();

    keys[source] = W::zero();
    reached[source] = true;
    let mut heap = IndexedMinHeap::new(n, &mut position)?;
    heap.insert(source, &keys)?;
    stats.inserts += 1;

    while !heap.is_empty() {
        let v = heap.extract_min(&keys)?;
        in_tree[v] = true;
        order.push(v);
        stats.extractions += 1;

        log::debug!(
            "{} added vertex {} along edge {:?}--{} with key {}",
            R::NAME,
            v,
            parents[v],
            v,
            keys[v]
        );

        for (u, weight) in graph.neighbors(v) {
            if in_tree[u] {
                continue;
            }
            let Some(candidate) = rule.candidate(keys[v], weight) else {
                continue;
            };

            if !reached[u] || candidate < keys[u] {
                keys[u] = candidate;
                reached[u] = true;
                parents[u] = Some(v);
                stats.relaxations += 1;

                match heap.position_of(u) {
                    None => {
                        heap.insert(u, &keys)?;
                        stats.inserts += 1;
                    }
                    Some(slot) => {
                        heap.sift_up(slot, &keys);
                        stats.decrease_keys += 1;
                    }
                }
            }
        }
    }

    log::debug!("{} frontier stats: {:?}", R::NAME, stats);

    Ok(TreeGrowth {
        keys,
        parents,
        in_tree,
        order,
        stats,
    })
}
