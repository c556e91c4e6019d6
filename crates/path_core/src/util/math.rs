use crate::{constants::Weight, graph::Vertex};

/// Straight line distance between two vertices in the plane
pub fn euclidean(src: &Vertex, dst: &Vertex) -> Weight {
    let dx = src.x - dst.x;
    let dy = src.y - dst.y;
    (dx * dx + dy * dy).sqrt()
}
