//! Plain text rendering of graphs and algorithm results

use std::fmt::Write;

use crate::algorithm::bfs::BreadthFirstResult;
use crate::algorithm::dfs::DepthFirstResult;
use crate::algorithm::prim::SpanningTreeResult;
use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, UndirectedGraph, Weight};

/// How vertex ids are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Plain numbers
    #[default]
    Numeric,
    /// `1 -> A`, `2 -> B`, ..., numbers past `Z`
    Letters,
}

/// Renders a vertex id, `@` standing for "none" in letter mode
pub fn vertex_label(vertex: usize, style: LabelStyle) -> String {
    match style {
        LabelStyle::Letters if vertex <= 26 => char::from(b'@' + vertex as u8).to_string(),
        _ => vertex.to_string(),
    }
}

fn parent_label(parent: Option<usize>, style: LabelStyle) -> String {
    match parent {
        Some(p) => vertex_label(p, style),
        None => vertex_label(0, style),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Renders each adjacency list as `adj[v] -> |u | w| -> ...`
pub fn render_adjacency<W: Weight>(graph: &UndirectedGraph<W>, style: LabelStyle) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        let _ = write!(out, "adj[{}] ->", vertex_label(v, style));
        for &(u, weight) in graph.adjacency(v) {
            let _ = write!(out, " |{} | {}| ->", vertex_label(u, style), weight);
        }
        out.push('\n');
    }
    out
}

/// Renders the discovery/finish table of a depth-first traversal
pub fn render_depth_first(result: &DepthFirstResult, style: LabelStyle) -> String {
    let mut out = String::from("Vertex\tParent\tDiscovered\tFinished\n");
    for &v in &result.order {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t\t{}",
            vertex_label(v, style),
            parent_label(result.parents[v], style),
            optional(result.discovery[v]),
            optional(result.finish[v])
        );
    }
    out
}

/// Renders the depth table of a breadth-first traversal
pub fn render_breadth_first(result: &BreadthFirstResult, style: LabelStyle) -> String {
    let mut out = String::from("Vertex\tParent\tDepth\n");
    for &v in &result.order {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            vertex_label(v, style),
            parent_label(result.parents[v], style),
            optional(result.depth[v])
        );
    }
    out
}

/// Renders the parent array and total weight of a spanning tree
pub fn render_spanning_tree<W: Weight>(result: &SpanningTreeResult<W>, style: LabelStyle) -> String {
    let mut out = String::from("Vertex\tParent\tEdge weight\n");
    for v in 1..result.parents.len() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            vertex_label(v, style),
            parent_label(result.parents[v], style),
            optional(result.connection_costs[v])
        );
    }
    let _ = writeln!(out, "Weight of MST = {}", result.total_weight);
    if !result.is_spanning() {
        let _ = writeln!(
            out,
            "Graph is disconnected: tree spans {} of {} vertices",
            result.reached_count(),
            result.parents.len() - 1
        );
    }
    out
}

/// Renders the parent and distance arrays of a shortest path tree
pub fn render_shortest_paths<W: Weight>(result: &ShortestPathResult<W>, style: LabelStyle) -> String {
    let mut out = format!(
        "Vertex\tParent\tDistance from {}\n",
        vertex_label(result.source, style)
    );
    for v in 1..result.distances.len() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            vertex_label(v, style),
            parent_label(result.predecessors[v], style),
            optional(result.distances[v])
        );
    }
    out
}
