use crate::{constants::Weight, graph::NodeIndex};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Follows the predecessor chain from `target` back to the vertex without a
/// predecessor (the source) and returns the path in source to target order.
///
/// `target` must have been reached, otherwise the result is a single node
/// path that does not start at the source.
pub fn reconstruct_path(
    target: NodeIndex,
    prev: &[Option<NodeIndex>],
    weight: Weight,
) -> ShortestPath {
    let mut path = vec![target];
    let mut current = target;

    while let Some(prev_node) = prev[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    path.reverse();
    ShortestPath::new(path, weight)
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: Result<shortest_path::PathResult, crate::error::GraphError>) {
    assert_eq!(Ok(shortest_path::PathResult::NoPath), result);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    result: Result<shortest_path::PathResult, crate::error::GraphError>,
) {
    let sp = match result {
        Ok(shortest_path::PathResult::Found(sp)) => sp,
        other => panic!("Expected a path, got {:?}", other),
    };
    let nodes: Vec<usize> = sp.nodes.iter().map(|n| n.index()).collect();
    assert_eq!(expected_path, nodes);
    approx::assert_abs_diff_eq!(expected_weight, sp.weight, epsilon = 1e-9);
}
