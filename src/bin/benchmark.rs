use std::time::{Duration, Instant};

use graph_trees::graph::generators::generate_random_connected;
use graph_trees::graph::{Graph, UndirectedGraph};
use graph_trees::{Dijkstra, Prim, ShortestPathAlgorithm};

// Function to benchmark one algorithm run on a graph
fn benchmark<T>(
    name: &str,
    graph: &UndirectedGraph<i64>,
    run: impl FnOnce() -> graph_trees::Result<T>,
) -> graph_trees::Result<Duration> {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    run()?;
    let duration = start.elapsed();

    println!("  - Finished in {:?}", duration);
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000, 500_000];

    // Extra edges per vertex on top of the spanning tree
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: indexed-heap Dijkstra and Prim");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let prim = Prim::new();
    let mut rng = rand::thread_rng();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random connected graph with {} vertices...", size);
        let graph: UndirectedGraph<i64> =
            generate_random_connected(size, size * edge_factor, 100, &mut rng)?;
        let source = 1;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dijkstra_time = benchmark("Dijkstra", &graph, || {
            dijkstra.compute_shortest_paths(&graph, source)
        })?;
        let prim_time = benchmark("Prim", &graph, || prim.compute_spanning_tree(&graph, source))?;

        results.push((size, graph.edge_count(), dijkstra_time, prim_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)", "Prim (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, dijkstra_time, prim_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15}",
            size,
            edges,
            dijkstra_time.as_millis(),
            prim_time.as_millis()
        );
    }

    Ok(())
}
