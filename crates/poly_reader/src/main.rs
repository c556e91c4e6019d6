use std::path::Path;

use poly_reader::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let now = std::time::Instant::now();
    // Read path to file from command line
    let poly_path = std::env::args().nth(1).expect("No path to .poly file given");

    let graph = PolyGraph::from_path(Path::new(&poly_path))?;

    let elapsed = now.elapsed();

    println!(
        "Finished reading .poly file in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "Graph has {} vertices and {} edges",
        graph.get_vertices().len(),
        graph.get_edges().len()
    );
    Ok(())
}
