use log::debug;

use crate::constants::{Weight, UNREACHABLE};
use crate::error::{ensure_index, GraphError};
use crate::graph::{node_index, Edge, NodeIndex, Vertex};
use crate::util::math::euclidean;

/// Dense, symmetric matrix of edge weights.
///
/// Missing edges and the diagonal hold [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    weights: Vec<Weight>,
}

impl DistanceMatrix {
    /// Matrix for `size` vertices without any edges
    pub fn new(size: usize) -> Self {
        DistanceMatrix {
            size,
            weights: vec![UNREACHABLE; size * size],
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Raw entry, [`UNREACHABLE`] if there is no edge.
    ///
    /// **Panics** if either index is out of range
    #[inline]
    pub fn get(&self, source: NodeIndex, target: NodeIndex) -> Weight {
        self.row(source)[target.index()]
    }

    /// Weight of the edge between `source` and `target`, if there is one
    pub fn weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        if source.index() >= self.size || target.index() >= self.size {
            return None;
        }
        Some(self.get(source, target)).filter(|w| *w < UNREACHABLE)
    }

    pub fn is_reachable(&self, source: NodeIndex, target: NodeIndex) -> bool {
        self.weight(source, target).is_some()
    }

    /// All entries of `source`, indexed by target
    ///
    /// **Panics** if `source` is out of range
    #[inline]
    pub fn row(&self, source: NodeIndex) -> &[Weight] {
        let start = source.index() * self.size;
        &self.weights[start..start + self.size]
    }

    /// Adjacent vertices of `source` with edge weights, in ascending index order
    pub fn neighbors(&self, source: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.row(source)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w < UNREACHABLE)
            .map(|(v, w)| (node_index(v), *w))
    }

    /// Number of incident edges of `source`
    pub fn degree(&self, source: NodeIndex) -> usize {
        self.neighbors(source).count()
    }

    /// Sets the weight in both directions, returns `false` if the edge was
    /// already present
    fn set_symmetric(&mut self, a: usize, b: usize, weight: Weight) -> bool {
        let is_new = self.weights[a * self.size + b] >= UNREACHABLE;
        self.weights[a * self.size + b] = weight;
        self.weights[b * self.size + a] = weight;
        is_new
    }
}

/// Builds the distance matrix of an undirected planar graph.
///
/// Every edge gets the Euclidean distance between its endpoints as weight in
/// both directions. Duplicate edges are harmless, they write the same weight
/// again.
///
/// Fails if an edge references a vertex outside of `vertices`, connects a
/// vertex to itself or is too long to stay below [`UNREACHABLE`]. The sum of
/// all distinct edge weights bounds every simple path, so it has to stay below
/// [`UNREACHABLE`] as well.
pub fn build(vertices: &[Vertex], edges: &[Edge]) -> Result<DistanceMatrix, GraphError> {
    let mut matrix = DistanceMatrix::new(vertices.len());
    let mut total: Weight = 0.0;

    for edge in edges {
        let a = ensure_index(edge.source, vertices.len())?;
        let b = ensure_index(edge.target, vertices.len())?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        let weight = euclidean(&vertices[a], &vertices[b]);
        if !weight.is_finite() || weight >= UNREACHABLE {
            return Err(GraphError::WeightOutOfRange {
                from: a,
                to: b,
                weight,
            });
        }

        if matrix.set_symmetric(a, b, weight) {
            total += weight;
            if total >= UNREACHABLE {
                return Err(GraphError::TotalWeightOutOfRange { total });
            }
        }
    }

    debug!(
        "Built {0}x{0} distance matrix from {1} edges",
        vertices.len(),
        edges.len()
    );
    Ok(matrix)
}
