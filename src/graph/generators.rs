use crate::graph::traits::Weight;
use crate::graph::undirected::UndirectedGraph;
use crate::Result;
use rand::Rng;

fn random_weight<W: Weight, R: Rng>(rng: &mut R, max_weight: u32) -> W {
    // draw only values W can hold
    let cap = num_traits::cast::<W, u32>(W::max_value())
        .map_or(max_weight, |largest| largest.min(max_weight));
    num_traits::cast(rng.gen_range(0..=cap)).unwrap_or_else(W::max_value)
}

/// Generates a connected graph on `n` vertices: a random spanning tree plus
/// `extra_edges` random edges, weights drawn from `0..=max_weight` capped at
/// the largest value `W` holds
pub fn generate_random_connected<W, R>(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<UndirectedGraph<W>>
where
    W: Weight,
    R: Rng,
{
    let mut graph = UndirectedGraph::with_vertices(n);

    // Attach every vertex to a random earlier one
    for v in 2..=n {
        let u = rng.gen_range(1..v);
        let weight = random_weight(rng, max_weight);
        graph.add_edge(u, v, weight)?;
    }

    if n > 0 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(1..=n);
            let v = rng.gen_range(1..=n);
            let weight = random_weight(rng, max_weight);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a graph with `m` uniformly random edges, possibly disconnected
/// and possibly containing self-loops and parallel edges
pub fn generate_random<W, R>(n: usize, m: usize, max_weight: u32, rng: &mut R) -> Result<UndirectedGraph<W>>
where
    W: Weight,
    R: Rng,
{
    let mut graph = UndirectedGraph::with_vertices(n);
    if n == 0 {
        return Ok(graph);
    }

    for _ in 0..m {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        let weight = random_weight(rng, max_weight);
        graph.add_edge(u, v, weight)?;
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with 4-connectivity and uniform weights
pub fn generate_grid<W: Weight>(width: usize, height: usize, weight: W) -> Result<UndirectedGraph<W>> {
    let mut graph = UndirectedGraph::with_vertices(width * height);

    // Helper function to get vertex id from grid coordinates
    let get_index = |x: usize, y: usize| -> usize { y * width + x + 1 };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(get_index(x, y), get_index(x + 1, y), weight)?;
            }
            if y + 1 < height {
                graph.add_edge(get_index(x, y), get_index(x, y + 1), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates the path `1 - 2 - ... - n` with uniform weights
pub fn generate_path<W: Weight>(n: usize, weight: W) -> Result<UndirectedGraph<W>> {
    let mut graph = UndirectedGraph::with_vertices(n);
    for v in 2..=n {
        graph.add_edge(v - 1, v, weight)?;
    }
    Ok(graph)
}
