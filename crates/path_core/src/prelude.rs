//! Re-exports of the most commonly used items in `path_core`.
pub use crate::constants::{Weight, UNREACHABLE};
pub use crate::error::GraphError;
pub use crate::matrix::{build, DistanceMatrix};

pub use crate::search;
pub use crate::search::dijkstra::{solve, Dijkstra};
pub use crate::search::shortest_path::{PathResult, ShortestPath};

pub use crate::graph::node_index;
pub use crate::graph::{Edge, Graph, NodeIndex, Vertex};
pub use crate::util::test_graphs::sample_cycle_graph;
