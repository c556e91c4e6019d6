use crate::constants::{Weight, UNREACHABLE};
use crate::error::{ensure_index, GraphError};
use crate::graph::{node_index, NodeIndex};
use crate::matrix::DistanceMatrix;
use crate::search::shortest_path::PathResult;
use crate::statistics::SearchStats;
use log::{debug, info};

/// Tentative distances and predecessors after a full search
struct SearchSpace {
    dist: Vec<Weight>,
    prev: Vec<Option<NodeIndex>>,
}

/// Dijkstra's algorithm on a dense distance matrix.
///
/// The next vertex to settle is found by a linear scan over all vertices, so
/// a search costs O(V²). Ties are broken towards the lower index, both when
/// selecting the next vertex and when relaxing its neighbors, which makes the
/// returned path deterministic.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    matrix: &'a DistanceMatrix,
}

impl<'a> Dijkstra<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Dijkstra {
            matrix,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path from `source` to `target`.
    ///
    /// Returns [`GraphError::InvalidIndex`] if either vertex does not exist and
    /// [`PathResult::NoPath`] if `target` cannot be reached from `source`.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<PathResult, GraphError> {
        ensure_index(source, self.matrix.len())?;
        let target_idx = ensure_index(target, self.matrix.len())?;

        self.stats.init();
        let space = self.settle_all(source);
        self.stats.finish();

        let weight = space.dist[target_idx];
        if weight >= UNREACHABLE {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration, self.stats.nodes_settled
            );
            return Ok(PathResult::NoPath);
        }

        let sp = super::reconstruct_path(target, &space.prev, weight);
        debug!("Path found: {:?}", sp);
        info!(
            "Path found: {:?}/{} nodes settled",
            self.stats.duration, self.stats.nodes_settled
        );

        Ok(PathResult::Found(sp))
    }

    /// Distances from `source` to every vertex, `None` for unreachable ones
    pub fn distances_from(
        &mut self,
        source: NodeIndex,
    ) -> Result<Vec<Option<Weight>>, GraphError> {
        ensure_index(source, self.matrix.len())?;

        self.stats.init();
        let space = self.settle_all(source);
        self.stats.finish();

        Ok(space
            .dist
            .into_iter()
            .map(|d| Some(d).filter(|d| *d < UNREACHABLE))
            .collect())
    }

    fn settle_all(&mut self, source: NodeIndex) -> SearchSpace {
        let n = self.matrix.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        let mut visited = vec![false; n];

        dist[source.index()] = 0.0;

        for _ in 0..n {
            // First unvisited vertex with the smallest tentative distance
            let mut next = None;
            let mut min = UNREACHABLE;
            for v in 0..n {
                if !visited[v] && dist[v] < min {
                    next = Some(v);
                    min = dist[v];
                }
            }

            // Everything left is unreachable
            let Some(u) = next else { break };

            visited[u] = true;
            self.stats.nodes_settled += 1;

            for (v, weight) in self.matrix.neighbors(node_index(u)) {
                let new_distance = dist[u] + weight;
                if new_distance < dist[v.index()] {
                    dist[v.index()] = new_distance;
                    prev[v.index()] = Some(node_index(u));
                }
            }
        }

        SearchSpace { dist, prev }
    }
}

/// Runs a single search from `source` to `target` on `matrix`
pub fn solve(
    matrix: &DistanceMatrix,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<PathResult, GraphError> {
    Dijkstra::new(matrix).search(source, target)
}
