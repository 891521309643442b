use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use graph_trees::display::{self, LabelStyle};
use graph_trees::graph::{read_graph_file, Graph, UndirectedGraph};
use graph_trees::{
    BreadthFirst, BreadthFirstResult, DepthFirst, DepthFirstResult, DfsStrategy, Dijkstra, Prim,
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    All,
    Dfs,
    Bfs,
    Prim,
    Dijkstra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DfsStrategyArg {
    Stack,
    Recursive,
}

/// Run DFS, BFS, Prim and Dijkstra over a weighted undirected graph file
#[derive(Parser, Debug)]
#[command(name = "graph_trees", author, version, about, long_about = None)]
struct Cli {
    /// Edge-list file: a `V E` header followed by `E` lines of `u v w`
    file: PathBuf,

    /// Start vertex (1-based)
    #[arg(short, long, env = "GRAPH_TREES_SOURCE", default_value_t = 1)]
    source: usize,

    /// Algorithms to run, repeatable (default: all)
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<AlgorithmArg>,

    /// Depth-first search strategy
    #[arg(long, value_enum, default_value = "stack")]
    dfs_strategy: DfsStrategyArg,

    /// Print vertices as letters (1 = A, 2 = B, ...)
    #[arg(long)]
    letters: bool,

    /// Output in JSON format for programmatic use
    #[arg(long)]
    json: bool,

    /// Print the adjacency lists before running
    #[arg(long)]
    show_graph: bool,

    /// Report how long each algorithm took
    #[arg(long)]
    timing: bool,
}

impl Cli {
    fn runs(&self, algorithm: AlgorithmArg) -> bool {
        self.algorithms.is_empty()
            || self.algorithms.contains(&AlgorithmArg::All)
            || self.algorithms.contains(&algorithm)
    }
}

#[derive(Debug, Default, Serialize)]
struct Report {
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth_first: Option<DepthFirstResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breadth_first: Option<BreadthFirstResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prim: Option<SpanningTreeResult<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dijkstra: Option<ShortestPathResult<i64>>,
    /// Elapsed wall time per algorithm in milliseconds
    timings_ms: BTreeMap<&'static str, f64>,
}

fn timed<T>(
    report: &mut Report,
    name: &'static str,
    run: impl FnOnce() -> graph_trees::Result<T>,
) -> graph_trees::Result<T> {
    let start = Instant::now();
    let value = run()?;
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    log::debug!("{} took {:.3} ms", name, elapsed);
    report.timings_ms.insert(name, elapsed);
    Ok(value)
}

fn run_algorithms(cli: &Cli, graph: &UndirectedGraph<i64>) -> graph_trees::Result<Report> {
    let mut report = Report {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        ..Default::default()
    };

    if cli.runs(AlgorithmArg::Dfs) {
        let strategy = match cli.dfs_strategy {
            DfsStrategyArg::Stack => DfsStrategy::ExplicitStack,
            DfsStrategyArg::Recursive => DfsStrategy::Recursive,
        };
        let dfs = DepthFirst::new().with_strategy(strategy);
        let result = timed(&mut report, "depth_first", || dfs.traverse(graph, cli.source))?;
        report.depth_first = Some(result);
    }

    if cli.runs(AlgorithmArg::Bfs) {
        let bfs = BreadthFirst::new();
        let result = timed(&mut report, "breadth_first", || bfs.traverse(graph, cli.source))?;
        report.breadth_first = Some(result);
    }

    if cli.runs(AlgorithmArg::Prim) {
        let prim = Prim::new();
        let result = timed(&mut report, "prim", || prim.compute_spanning_tree(graph, cli.source))?;
        report.prim = Some(result);
    }

    if cli.runs(AlgorithmArg::Dijkstra) {
        let dijkstra = Dijkstra::new();
        let result = timed(&mut report, "dijkstra", || {
            dijkstra.compute_shortest_paths(graph, cli.source)
        })?;
        report.dijkstra = Some(result);
    }

    Ok(report)
}

fn print_section(title: &str, body: String) {
    println!("{}", "-------------------------------------".dimmed());
    println!("{}", title.bold().cyan());
    print!("{}", body);
    println!();
}

fn print_report(cli: &Cli, report: &Report, style: LabelStyle) {
    let start = display::vertex_label(cli.source, style);

    if let Some(result) = &report.depth_first {
        print_section(
            &format!("Depth First Graph Traversal starting with vertex {}", start),
            display::render_depth_first(result, style),
        );
    }
    if let Some(result) = &report.breadth_first {
        print_section(
            &format!("Breadth First Graph Traversal starting with vertex {}", start),
            display::render_breadth_first(result, style),
        );
    }
    if let Some(result) = &report.prim {
        print_section(
            &format!("Prim's Minimum Spanning Tree starting with vertex {}", start),
            display::render_spanning_tree(result, style),
        );
    }
    if let Some(result) = &report.dijkstra {
        print_section(
            &format!("Dijkstra's Shortest Path Tree starting with vertex {}", start),
            display::render_shortest_paths(result, style),
        );
    }

    if cli.timing {
        for (name, elapsed) in &report.timings_ms {
            println!("{} {:.3} ms", format!("{}:", name).yellow(), elapsed);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let style = if cli.letters {
        LabelStyle::Letters
    } else {
        LabelStyle::Numeric
    };

    let graph: UndirectedGraph<i64> = read_graph_file(&cli.file)?;
    log::info!(
        "Loaded {} with {} vertices and {} edges",
        cli.file.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    if cli.show_graph && !cli.json {
        print_section("Adjacency lists", display::render_adjacency(&graph, style));
    }

    let report = run_algorithms(&cli, &graph)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&cli, &report, style);
    }

    Ok(())
}
