/// Edge weight type
pub type Weight = f64;
/// Identifier of a vertex as given by the caller, e.g. the id column of a `.poly` file
pub type VertexId = usize;
/// Marks a missing edge in the distance matrix and an unreached vertex during search.
///
/// Every edge weight and every path length must stay below this value.
/// [`crate::matrix::build`] enforces it by bounding the sum of all edge weights.
pub const UNREACHABLE: Weight = 1e9;
