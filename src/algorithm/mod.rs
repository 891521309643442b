pub mod traits;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod frontier;
pub mod prim;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, VisitState};
