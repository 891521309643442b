//! Reading and writing the plain text edge-list format
//!
//! ```text
//! V E
//! u1 v1 w1
//! ...
//! ```
//!
//! The header gives the vertex count `V` (vertices are `1..=V`) and the edge
//! count `E`. Each of the following `E` non-blank lines holds one undirected
//! edge. Blank lines are skipped and anything after the last edge is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use crate::graph::traits::{Graph, Weight};
use crate::graph::undirected::UndirectedGraph;
use crate::{Error, Result};

/// Largest vertex count accepted from a header line
pub const MAX_VERTICES: usize = 1 << 26;

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::GraphParse {
        line,
        message: message.into(),
    }
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(parse_error(
            line,
            format!("expected header `V E`, found {} tokens", tokens.len()),
        ));
    }

    let vertices = tokens[0]
        .parse::<usize>()
        .map_err(|_| parse_error(line, format!("invalid vertex count `{}`", tokens[0])))?;
    let edges = tokens[1]
        .parse::<usize>()
        .map_err(|_| parse_error(line, format!("invalid edge count `{}`", tokens[1])))?;
    if vertices > MAX_VERTICES {
        return Err(parse_error(
            line,
            format!("vertex count {} exceeds the limit of {}", vertices, MAX_VERTICES),
        ));
    }

    Ok((vertices, edges))
}

fn parse_vertex(line: usize, token: &str, vertex_count: usize) -> Result<usize> {
    let vertex = token
        .parse::<usize>()
        .map_err(|_| parse_error(line, format!("invalid vertex id `{}`", token)))?;
    if vertex == 0 || vertex > vertex_count {
        return Err(parse_error(
            line,
            format!("vertex {} out of range 1..={}", vertex, vertex_count),
        ));
    }
    Ok(vertex)
}

fn parse_edge<W: Weight>(line: usize, text: &str, vertex_count: usize) -> Result<(usize, usize, W)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(parse_error(
            line,
            format!("expected edge `u v w`, found {} tokens", tokens.len()),
        ));
    }

    let u = parse_vertex(line, tokens[0], vertex_count)?;
    let v = parse_vertex(line, tokens[1], vertex_count)?;
    let weight = W::from_str_radix(tokens[2], 10)
        .map_err(|_| parse_error(line, format!("invalid weight `{}`", tokens[2])))?;
    if weight < W::zero() {
        return Err(parse_error(line, format!("negative weight {}", weight)));
    }

    Ok((u, v, weight))
}

/// Builds a graph from an edge-list reader
///
/// Fails with [`Error::GraphParse`] naming the offending line on any malformed or
/// missing input; no partial graph is returned.
pub fn parse_graph<W, R>(reader: R) -> Result<UndirectedGraph<W>>
where
    W: Weight,
    R: BufRead,
{
    let mut lines = reader.lines().enumerate().map(|(index, line)| (index + 1, line));
    let mut last_line = 0;

    let (vertex_count, edge_count) = loop {
        let Some((number, line)) = lines.next() else {
            return Err(parse_error(last_line + 1, "missing header `V E`"));
        };
        let line = line?;
        last_line = number;
        if !line.trim().is_empty() {
            break parse_header(number, &line)?;
        }
    };

    log::debug!("Reading {} edges over {} vertices", edge_count, vertex_count);

    let mut graph = UndirectedGraph::with_vertices(vertex_count);
    let mut read = 0;
    while read < edge_count {
        let Some((number, line)) = lines.next() else {
            return Err(parse_error(
                last_line + 1,
                format!("expected {} edges, found {}", edge_count, read),
            ));
        };
        let line = line?;
        last_line = number;
        if line.trim().is_empty() {
            continue;
        }

        let (u, v, weight) = parse_edge::<W>(number, &line, vertex_count)?;
        log::debug!("Edge {}--({})--{}", u, weight, v);
        graph
            .add_edge(u, v, weight)
            .map_err(|err| parse_error(number, err.to_string()))?;
        read += 1;
    }

    let trailing = lines
        .filter(|(_, line)| line.as_ref().map_or(true, |text| !text.trim().is_empty()))
        .count();
    if trailing > 0 {
        log::warn!("Ignoring {} lines after the last edge (line {})", trailing, last_line);
    }

    Ok(graph)
}

/// Reads a graph from an edge-list file
pub fn read_graph_file<W: Weight>(path: impl AsRef<Path>) -> Result<UndirectedGraph<W>> {
    let file = File::open(path.as_ref())?;
    parse_graph(BufReader::new(file))
}

/// Writes a graph in the same edge-list format `parse_graph` reads
pub fn write_graph<W, Wr>(graph: &UndirectedGraph<W>, mut writer: Wr) -> Result<()>
where
    W: Weight,
    Wr: Write,
{
    let edges = graph.edges();
    writeln!(writer, "{} {}", graph.vertex_count(), edges.len())?;
    for (u, v, weight) in edges {
        writeln!(writer, "{} {} {}", u, v, weight)?;
    }
    Ok(())
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Serialises the graph back to the edge-list format
    pub fn to_edge_list_string(&self) -> String {
        let mut text = format!("{} {}\n", self.vertex_count(), self.edge_count());
        for (u, v, weight) in self.edges() {
            text.push_str(&format!("{} {} {}\n", u, v, weight));
        }
        text
    }
}

impl<W> FromStr for UndirectedGraph<W>
where
    W: Weight,
{
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_graph(text.as_bytes())
    }
}
