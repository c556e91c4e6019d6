use path_core::prelude::*;
use path_core::{edge, vertex};

fn main() {
    // Right triangle A(0,0), B(3,0), C(3,4) without the hypotenuse
    let vertices = vec![
        vertex!(0, 0.0, 0.0),
        vertex!(1, 3.0, 0.0),
        vertex!(2, 3.0, 4.0),
    ];
    let edges = vec![edge!(0, 1), edge!(1, 2)];

    // Build the distance matrix
    let matrix = build(&vertices, &edges).expect("Failed to build distance matrix");

    // Search
    let mut dijkstra = Dijkstra::new(&matrix);
    let s = node_index(0);
    let t = node_index(2);

    match dijkstra.search(s, t).expect("Invalid vertex index") {
        PathResult::Found(shortest_path) => {
            println!("Costs: {}", shortest_path.weight);
            println!("Path: {:?}", shortest_path.nodes);
        }
        PathResult::NoPath => println!("No path found"),
    }
    println!("{}", dijkstra.stats);
}
