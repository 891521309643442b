use graph_trees::graph::generators::{generate_random, generate_random_connected};
use graph_trees::graph::{Graph, UndirectedGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_weights_are_capped_to_the_weight_type() {
    let mut rng = StdRng::seed_from_u64(21);
    let graph: UndirectedGraph<u8> = generate_random(20, 300, 100_000, &mut rng).unwrap();

    let weights: Vec<u8> = graph.edges().into_iter().map(|(_, _, w)| w).collect();
    assert_eq!(weights.len(), 300);
    // draws spread over the whole u8 range instead of piling up at zero
    assert!(weights.iter().filter(|&&w| w == 0).count() < 30);
    assert!(weights.iter().any(|&w| w > 200));
}

#[test]
fn test_weights_respect_requested_maximum() {
    let mut rng = StdRng::seed_from_u64(8);
    let graph: UndirectedGraph<i64> = generate_random_connected(50, 100, 9, &mut rng).unwrap();

    assert_eq!(graph.edge_count(), 149);
    assert!(graph.edges().iter().all(|&(_, _, w)| (0..=9).contains(&w)));
}
