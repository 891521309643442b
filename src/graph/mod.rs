pub mod generators;
pub mod parser;
pub mod traits;
pub mod undirected;

pub use parser::{parse_graph, read_graph_file, write_graph, MAX_VERTICES};
pub use traits::{Graph, Weight};
pub use undirected::UndirectedGraph;
