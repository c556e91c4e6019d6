use crate::{constants::Weight, graph::NodeIndex};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    /// Vertices from source to target, both included
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}

/// Outcome of a search between two valid vertices
#[derive(Debug, PartialEq, Clone)]
pub enum PathResult {
    /// Source and target lie in different connected components
    NoPath,
    Found(ShortestPath),
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// Total weight of the path, if one was found
    pub fn distance(&self) -> Option<Weight> {
        match self {
            PathResult::Found(sp) => Some(sp.weight),
            PathResult::NoPath => None,
        }
    }
}
