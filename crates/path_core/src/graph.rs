use crate::constants::{VertexId, Weight};
use crate::error::{ensure_index, GraphError};
use crate::matrix::{build, DistanceMatrix};
use crate::search::{dijkstra::Dijkstra, shortest_path::PathResult};
use crate::statistics::average_degree;
use crate::util::math::euclidean;
use anyhow::Context;
use log::{debug, info};
use poly_reader::PolyGraph;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Vertex identifier. Position of the vertex in [`Graph::vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Labeled point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(id: VertexId, x: f64, y: f64) -> Self {
        Vertex { id, x, y }
    }

    /// Straight line distance to `other`
    pub fn distance(&self, other: &Vertex) -> Weight {
        euclidean(self, other)
    }
}

/// Undirected edge. The weight is derived from the endpoint coordinates when
/// the distance matrix is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex) -> Self {
        Edge { source, target }
    }

    /// True if the edge connects `a` and `b`, in either orientation
    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn is_incident(&self, node: NodeIndex) -> bool {
        self.source == node || self.target == node
    }
}

/// Row of an edge csv file. Endpoints are vertex ids, not indices.
#[derive(Debug, Deserialize)]
struct CsvEdge {
    source: VertexId,
    target: VertexId,
}

/// Editable planar graph.
///
/// Owns copies of its vertices and edges together with the distance matrix
/// built from them. Every change to the vertex or edge set rebuilds the
/// matrix from scratch.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    matrix: DistanceMatrix,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            matrix: DistanceMatrix::new(0),
        }
    }

    /// Creates a graph from `vertices` and `edges` and builds its distance matrix.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let matrix = build(&vertices, &edges)?;
        Ok(Self {
            vertices,
            edges,
            matrix,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn vertex(&self, node_idx: NodeIndex) -> Option<&Vertex> {
        self.vertices.get(node_idx.index())
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Adds a vertex at (`x`, `y`). Its id is one above the largest id in use.
    ///
    /// Returns the index of the new vertex.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> Result<NodeIndex, GraphError> {
        let id = self.vertices.iter().map(|v| v.id + 1).max().unwrap_or(0);
        let node_idx = node_index(self.vertices.len());

        self.vertices.push(Vertex::new(id, x, y));
        self.rebuild()?;

        debug!("Added vertex {} ({}) at ({:.2}, {:.2})", node_idx, id, x, y);
        Ok(node_idx)
    }

    /// Removes a vertex together with all its edges.
    ///
    /// Vertices behind the removed one move one index down, edges are
    /// renumbered accordingly.
    pub fn remove_vertex(&mut self, node_idx: NodeIndex) -> Result<Vertex, GraphError> {
        let removed = ensure_index(node_idx, self.vertices.len())?;

        let vertex = self.vertices.remove(removed);
        let shift = |n: NodeIndex| {
            if n.index() > removed {
                node_index(n.index() - 1)
            } else {
                n
            }
        };
        self.edges = self
            .edges
            .iter()
            .filter(|edge| !edge.is_incident(node_idx))
            .map(|edge| Edge::new(shift(edge.source), shift(edge.target)))
            .collect();
        self.rebuild()?;

        debug!("Removed vertex {} ({})", node_idx, vertex.id);
        Ok(vertex)
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Returns `false` without changing the graph if the edge already exists.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<bool, GraphError> {
        ensure_index(a, self.vertices.len())?;
        ensure_index(b, self.vertices.len())?;
        if a == b {
            return Err(GraphError::SelfLoop(a.index()));
        }
        if self.edges.iter().any(|edge| edge.connects(a, b)) {
            debug!("Edge {}-{} already exists", a, b);
            return Ok(false);
        }

        self.edges.push(Edge::new(a, b));
        if let Err(e) = self.rebuild() {
            self.edges.pop();
            return Err(e);
        }

        debug!("Added edge {}-{}", a, b);
        Ok(true)
    }

    /// Removes the edge between `a` and `b`, whichever way round it was added.
    pub fn remove_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), GraphError> {
        ensure_index(a, self.vertices.len())?;
        ensure_index(b, self.vertices.len())?;
        let pos = self
            .edges
            .iter()
            .position(|edge| edge.connects(a, b))
            .ok_or(GraphError::EdgeNotFound(a.index(), b.index()))?;

        self.edges.remove(pos);
        self.rebuild()?;

        debug!("Removed edge {}-{}", a, b);
        Ok(())
    }

    fn rebuild(&mut self) -> Result<(), GraphError> {
        self.matrix = build(&self.vertices, &self.edges)?;
        Ok(())
    }

    /// Shortest path from `source` to `target` on the current matrix
    pub fn shortest_path(
        &self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<PathResult, GraphError> {
        Dijkstra::new(&self.matrix).search(source, target)
    }

    pub fn info(&self) -> String {
        format!(
            "Graph:\t#Vertices: {}, #Edges: {}, avg. degree: {:.2}",
            self.vertices.len(),
            self.edges.len(),
            average_degree(&self.matrix)
        )
    }

    pub fn from_poly_graph(poly: &PolyGraph) -> Result<Self, GraphError> {
        let vertices = poly
            .get_vertices()
            .iter()
            .map(|v| Vertex::new(v.id, v.x, v.y))
            .collect();
        let edges = poly
            .get_edges()
            .iter()
            .map(|e| Edge::new(node_index(e.source), node_index(e.target)))
            .collect();

        Self::from_parts(vertices, edges)
    }

    pub fn to_poly_graph(&self) -> PolyGraph {
        let mut poly = PolyGraph::with_capacity(self.vertices.len(), self.edges.len());
        for vertex in &self.vertices {
            poly.add_vertex(vertex.id, vertex.x, vertex.y);
        }
        // lengths are recomputed from the coordinates on write
        for edge in &self.edges {
            poly.add_edge(edge.source.index(), edge.target.index(), None);
        }
        poly
    }

    pub fn from_poly(path_to_poly: &Path) -> anyhow::Result<Self> {
        let poly = PolyGraph::from_path(path_to_poly).context("Could not read poly file")?;
        let g = Self::from_poly_graph(&poly)
            .with_context(|| format!("Invalid graph in {}", path_to_poly.display()))?;

        info!(
            "Graph has {} vertices and {} edges",
            g.vertices.len(),
            g.edges.len()
        );
        Ok(g)
    }

    pub fn export_poly(&self, path_to_poly: &Path) -> anyhow::Result<()> {
        self.to_poly_graph().write_to_path(path_to_poly)?;
        info!("Graph written to {}", path_to_poly.display());
        Ok(())
    }

    /// Reads vertices (`id,x,y`) and edges (`source,target`, given as vertex ids)
    /// from two csv files.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        let mut vertices = Vec::new();
        let mut vertex_index: FxHashMap<VertexId, usize> = FxHashMap::default();

        let mut reader = csv::Reader::from_path(path_to_nodes)?;
        for (i, result) in reader.deserialize().enumerate() {
            let vertex: Vertex = result.context("Failed to parse Vertex")?;
            if vertex_index.insert(vertex.id, i).is_some() {
                anyhow::bail!("Duplicate vertex id {}", vertex.id);
            }
            vertices.push(vertex);
        }

        let mut edges = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let edge: CsvEdge = result.context("Failed to parse Edge")?;
            let lookup = |id: VertexId| {
                vertex_index
                    .get(&id)
                    .map(|&i| node_index(i))
                    .with_context(|| format!("Edge references unknown vertex id {}", id))
            };
            edges.push(Edge::new(lookup(edge.source)?, lookup(edge.target)?));
        }

        Ok(Self::from_parts(vertices, edges)?)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create an undirected edge between two vertex indices
///
/// edge!(0, 1)
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into())
    };
}

/// Macro to create a vertex with a given id, x, y
/// vertex!(0, 1.0, 1.0)
#[macro_export]
macro_rules! vertex {
    ($id:expr, $x:expr, $y:expr) => {
        $crate::graph::Vertex::new($id, $x, $y)
    };
}

#[cfg(test)]
mod tests {
    use crate::constants::UNREACHABLE;
    use crate::util::test_graphs::{sample_cycle_graph, triangle_graph};

    use super::*;

    #[test]
    fn read_from_csv() {
        let graph: Graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/nodes.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges.csv"),
        )
        .unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 2);
        // Ids 10/20/30 map to indices 0/1/2
        assert_eq!(graph.matrix().weight(0.into(), 1.into()), Some(3.0));
        assert_eq!(graph.matrix().weight(1.into(), 2.into()), Some(4.0));
        assert_eq!(graph.matrix().weight(0.into(), 2.into()), None);
    }

    #[test]
    fn read_from_poly() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/sample.poly");
        let g = Graph::from_poly(&path).unwrap();
        let sample = sample_cycle_graph().unwrap();

        assert_eq!(g.num_vertices(), 18);
        assert_eq!(g.num_edges(), 18);
        assert_eq!(g.vertices(), sample.vertices());
        assert_eq!(g.edges(), sample.edges());
    }

    #[test]
    fn poly_export_writes_lengths() {
        let g = triangle_graph(true).unwrap();
        let poly = g.to_poly_graph();

        assert_eq!(poly.get_vertices().len(), 3);
        assert_eq!(poly.get_edges()[2].weight, None);

        let mut out = Vec::new();
        poly.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == "2 0 2 5"));

        let h = Graph::from_poly_graph(&text.parse::<PolyGraph>().unwrap()).unwrap();
        assert_eq!(g.matrix(), h.matrix());
    }

    #[test]
    fn add_vertex_uses_next_id() {
        let mut g = Graph::new();
        let a = g.add_vertex(0.0, 0.0).unwrap();
        let b = g.add_vertex(1.0, 0.0).unwrap();

        assert_eq!(a, node_index(0));
        assert_eq!(b, node_index(1));
        assert_eq!(g.vertex(b).unwrap().id, 1);
        assert_eq!(g.matrix().len(), 2);

        let mut g = Graph::from_parts(vec![vertex!(7, 0.0, 0.0)], vec![]).unwrap();
        let c = g.add_vertex(1.0, 1.0).unwrap();
        assert_eq!(g.vertex(c).unwrap().id, 8);
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex(0.0, 0.0).unwrap();
        let b = g.add_vertex(3.0, 4.0).unwrap();

        assert!(g.add_edge(a, b).unwrap());
        assert!(!g.add_edge(b, a).unwrap());

        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.matrix().weight(a, b), Some(5.0));
        assert_eq!(g.matrix().weight(b, a), Some(5.0));
    }

    #[test]
    fn add_invalid_edges() {
        let mut g = triangle_graph(false).unwrap();

        assert_eq!(
            g.add_edge(0.into(), 3.into()),
            Err(GraphError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(g.add_edge(1.into(), 1.into()), Err(GraphError::SelfLoop(1)));

        let far = g.add_vertex(UNREACHABLE, 0.0).unwrap();
        assert!(matches!(
            g.add_edge(0.into(), far),
            Err(GraphError::WeightOutOfRange { .. })
        ));
        // Failed insertions leave the graph untouched
        assert_eq!(g.num_edges(), 2);
        assert!(!g.matrix().is_reachable(0.into(), far));
    }

    #[test]
    fn remove_edge() {
        let mut g = triangle_graph(true).unwrap();

        g.remove_edge(2.into(), 0.into()).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.matrix().weight(0.into(), 2.into()), None);

        assert_eq!(
            g.remove_edge(0.into(), 2.into()),
            Err(GraphError::EdgeNotFound(0, 2))
        );
        assert_eq!(
            g.remove_edge(0.into(), 5.into()),
            Err(GraphError::InvalidIndex { index: 5, len: 3 })
        );
        assert_eq!(
            g.remove_edge(9.into(), 1.into()),
            Err(GraphError::InvalidIndex { index: 9, len: 3 })
        );
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn remove_vertex_shifts_indices() {
        // A(0,0) - B(3,0) - C(3,4), A - C
        let mut g = triangle_graph(true).unwrap();

        let removed = g.remove_vertex(1.into()).unwrap();
        assert_eq!(removed.id, 1);

        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.edges(), &[edge!(0, 1)]);
        assert_eq!(g.vertex(1.into()).unwrap().id, 2);
        assert_eq!(g.matrix().weight(0.into(), 1.into()), Some(5.0));

        assert_eq!(
            g.remove_vertex(2.into()),
            Err(GraphError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn from_parts_rejects_bad_edges() {
        let vertices = vec![vertex!(0, 0.0, 0.0), vertex!(1, 1.0, 0.0)];

        assert_eq!(
            Graph::from_parts(vertices.clone(), vec![edge!(0, 2)]).err(),
            Some(GraphError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(
            Graph::from_parts(vertices, vec![edge!(0, 0)]).err(),
            Some(GraphError::SelfLoop(0))
        );
    }
}
