use thiserror::Error;

use crate::{constants::Weight, graph::NodeIndex};

/// Errors raised by graph construction, editing and search.
///
/// A disconnected source/target pair is not an error, see
/// [`crate::search::shortest_path::PathResult::NoPath`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex index {index} is out of range (graph has {len} vertices)")]
    InvalidIndex { index: usize, len: usize },

    #[error("edge from vertex {0} to itself is not supported")]
    SelfLoop(usize),

    #[error("edge {from}-{to} has weight {weight}, which is not below the unreachable sentinel")]
    WeightOutOfRange { from: usize, to: usize, weight: Weight },

    #[error("edge weights add up to {total}, which is not below the unreachable sentinel")]
    TotalWeightOutOfRange { total: Weight },

    #[error("no edge between vertex {0} and vertex {1}")]
    EdgeNotFound(usize, usize),
}

/// Returns the raw index if `index` addresses one of `len` vertices.
pub(crate) fn ensure_index(index: NodeIndex, len: usize) -> Result<usize, GraphError> {
    if index.index() < len {
        Ok(index.index())
    } else {
        Err(GraphError::InvalidIndex {
            index: index.index(),
            len,
        })
    }
}
