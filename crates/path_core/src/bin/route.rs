use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use path_core::{prelude::*, util::cli};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cfg = cli::parse();

    let graph = match &cfg.poly_file {
        Some(path) => Graph::from_poly(path)?,
        None => sample_cycle_graph()?,
    };

    println!("Shortest path between two vertices - Dijkstra's algorithm\n");
    println!("Total vertices: {}", graph.num_vertices());
    println!("Total edges   : {}", graph.num_edges());

    let last = graph.num_vertices().saturating_sub(1);
    let Some(source) = cfg.source.map_or_else(|| prompt("Source", last), |s| Ok(Some(s)))? else {
        return Ok(invalid_input(last));
    };
    let Some(target) = cfg.target.map_or_else(|| prompt("Target", last), |t| Ok(Some(t)))? else {
        return Ok(invalid_input(last));
    };

    match graph.shortest_path(node_index(source), node_index(target)) {
        Ok(PathResult::Found(sp)) => {
            println!("\nTotal distance: {:.2}", sp.weight);
            println!("\nPath (start to end):");
            for node in &sp.nodes {
                if let Some(v) = graph.vertex(*node) {
                    println!("{} (x={:.6}, y={:.6})", node, v.x, v.y);
                }
            }
        }
        Ok(PathResult::NoPath) => println!("No path between {} and {}", source, target),
        Err(e @ GraphError::InvalidIndex { .. }) => {
            eprintln!("Invalid indices: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(ExitCode::SUCCESS)
}

fn invalid_input(last: usize) -> ExitCode {
    eprintln!("Invalid indices: expected vertex indices from 0 to {last}");
    ExitCode::FAILURE
}

/// Reads a vertex index from stdin, `None` if the input is not one
fn prompt(role: &str, last: usize) -> anyhow::Result<Option<usize>> {
    print!("{role} vertex (0 to {last}): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(cli::parse_index(&line))
}
