//! Shortest paths on small undirected planar graphs.
//!
//! Edge weights are the Euclidean distances between vertex coordinates. The
//! graph is stored as a dense distance matrix and searched with the O(V²)
//! variant of Dijkstra's algorithm.
//!
//! # Basic usage
//! ```
//! use path_core::prelude::*;
//! use path_core::{edge, vertex};
//!
//! let vertices = vec![
//!     vertex!(0, 0.0, 0.0),
//!     vertex!(1, 3.0, 0.0),
//!     vertex!(2, 3.0, 4.0),
//! ];
//! let edges = vec![edge!(0, 1), edge!(1, 2)];
//!
//! // Build the distance matrix
//! let matrix = build(&vertices, &edges).expect("Edges reference valid vertices");
//!
//! // Search
//! let result = solve(&matrix, node_index(0), node_index(2)).expect("Valid indices");
//! assert_eq!(result.distance(), Some(7.0));
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
