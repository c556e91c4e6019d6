use crate::{
    edge,
    error::GraphError,
    graph::{node_index, Edge, Graph, Vertex},
    vertex,
};

/// Vertices of the sample graph: two arcs of a circle between vertex 0 and
/// vertex 9, plus vertex 1 which has no edges.
pub fn sample_vertices() -> Vec<Vertex> {
    vec![
        vertex!(0, 149.0, 200.0),
        vertex!(1, 225.0, 200.0),
        vertex!(2, 156.175936136879, 193.978674634193),
        vertex!(3, 164.288445856511, 189.29491496376),
        vertex!(4, 173.091034656191, 186.09103465619),
        vertex!(5, 182.316240329567, 184.46438199339),
        vertex!(6, 191.683759670433, 184.46438199339),
        vertex!(7, 200.908965343809, 186.091034656191),
        vertex!(8, 209.711554143489, 189.29491496376),
        vertex!(9, 217.824063863121, 193.978674634193),
        vertex!(10, 217.824063863121, 206.021325365807),
        vertex!(11, 209.711554143489, 210.70508503624),
        vertex!(12, 200.908965343809, 213.908965343809),
        vertex!(13, 191.683759670433, 215.53561800661),
        vertex!(14, 182.316240329567, 215.53561800661),
        vertex!(15, 173.091034656191, 213.908965343809),
        vertex!(16, 164.288445856511, 210.70508503624),
        vertex!(17, 156.175936136879, 206.021325365807),
    ]
}

/// Edges of the sample graph. The upper arc runs 0, 2..=9, the lower arc
/// 9..=17, 0, and the chord 9-0 closes both loops.
pub fn sample_edges() -> Vec<Edge> {
    vec![
        edge!(0, 2),
        edge!(2, 3),
        edge!(3, 4),
        edge!(4, 5),
        edge!(5, 6),
        edge!(6, 7),
        edge!(7, 8),
        edge!(8, 9),
        edge!(9, 0),
        edge!(9, 10),
        edge!(10, 11),
        edge!(11, 12),
        edge!(12, 13),
        edge!(13, 14),
        edge!(14, 15),
        edge!(15, 16),
        edge!(16, 17),
        edge!(17, 0),
    ]
}

pub fn sample_cycle_graph() -> Result<Graph, GraphError> {
    Graph::from_parts(sample_vertices(), sample_edges())
}

pub fn triangle_graph(with_hypotenuse: bool) -> Result<Graph, GraphError> {
    //      C
    //    / |
    //   /  | 4
    //  /   |
    // A -- B
    //   3
    let vertices = vec![
        vertex!(0, 0.0, 0.0),
        vertex!(1, 3.0, 0.0),
        vertex!(2, 3.0, 4.0),
    ];
    let mut edges = vec![edge!(0, 1), edge!(1, 2)];
    if with_hypotenuse {
        edges.push(edge!(0, 2));
    }

    Graph::from_parts(vertices, edges)
}

/// `width` x `height` grid with unit spacing. Vertex `(col, row)` has index
/// `row * width + col` and is connected to its right and lower neighbor.
pub fn grid_graph(width: usize, height: usize) -> Result<Graph, GraphError> {
    let mut vertices = Vec::with_capacity(width * height);
    let mut edges = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let idx = row * width + col;
            vertices.push(vertex!(idx, col as f64, row as f64));

            if col + 1 < width {
                edges.push(Edge::new(node_index(idx), node_index(idx + 1)));
            }
            if row + 1 < height {
                edges.push(Edge::new(node_index(idx), node_index(idx + width)));
            }
        }
    }

    Graph::from_parts(vertices, edges)
}
