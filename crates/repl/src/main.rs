//! Interactive shell to load, edit and query planar graphs
use std::fmt::Write;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::warn;
use path_core::prelude::*;
use rand::Rng;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

const MISSING_ARGS: &str = "Missing arguments";

/// Reads a required argument. Clap enforces presence, so `None` only shows
/// up if the command definition and the handler disagree.
fn arg<T: Copy + Send + Sync + 'static>(args: &ArgMatches, name: &str) -> Option<T> {
    args.get_one::<T>(name).copied()
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.info()))
}

fn load(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(path) = args.get_one::<PathBuf>("file") else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.load(path)))
}

fn save(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(path) = args.get_one::<PathBuf>("file") else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.save(path)))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(src), Some(dst)) = (arg::<usize>(&args, "src"), arg::<usize>(&args, "dst")) else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.route(src, dst)))
}

fn run_distances(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(src) = arg::<usize>(&args, "src") else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.distances(src)))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = arg::<usize>(&args, "n").unwrap_or(10);
    Ok(Some(context.measure(n, &mut rand::thread_rng())))
}

fn add_vertex(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(x), Some(y)) = (arg::<f64>(&args, "x"), arg::<f64>(&args, "y")) else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.add_vertex(x, y)))
}

fn add_edge(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(a), Some(b)) = (arg::<usize>(&args, "a"), arg::<usize>(&args, "b")) else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.add_edge(a, b)))
}

fn remove_vertex(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(idx) = arg::<usize>(&args, "idx") else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.remove_vertex(idx)))
}

fn remove_edge(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(a), Some(b)) = (arg::<usize>(&args, "a"), arg::<usize>(&args, "b")) else {
        return Ok(Some(MISSING_ARGS.to_string()));
    };
    Ok(Some(context.remove_edge(a, b)))
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }

    fn info(&self) -> String {
        self.graph.info()
    }

    fn load(&mut self, path: &Path) -> String {
        match Graph::from_poly(path) {
            Ok(graph) => {
                self.graph = graph;
                format!("Loaded {}. {}", path.display(), self.info())
            }
            Err(e) => format!("Could not load {}: {:#}", path.display(), e),
        }
    }

    fn save(&self, path: &Path) -> String {
        match self.graph.export_poly(path) {
            Ok(()) => format!("Graph saved to {}", path.display()),
            Err(e) => format!("Could not save {}: {:#}", path.display(), e),
        }
    }

    fn route(&self, src: usize, dst: usize) -> String {
        let mut dijkstra = Dijkstra::new(self.graph.matrix());

        match dijkstra.search(src.into(), dst.into()) {
            Ok(PathResult::Found(sp)) => {
                let mut path = format!("Total distance: {:.2}\n", sp.weight);
                for node in sp.nodes {
                    if let Some(v) = self.graph.vertex(node) {
                        let _ = writeln!(path, "{} (x={}, y={})", node, v.x, v.y);
                    }
                }
                let _ = write!(path, "{}", dijkstra.stats);
                path
            }
            Ok(PathResult::NoPath) => format!("No path between {} and {}", src, dst),
            Err(e) => format!("Invalid indices: {}", e),
        }
    }

    fn distances(&self, src: usize) -> String {
        let mut dijkstra = Dijkstra::new(self.graph.matrix());

        match dijkstra.distances_from(src.into()) {
            Ok(distances) => {
                let mut res = String::new();
                for (v, d) in distances.iter().enumerate() {
                    let _ = match d {
                        Some(d) => writeln!(res, "{} -> {}: {:.2}", src, v, d),
                        None => writeln!(res, "{} -> {}: unreachable", src, v),
                    };
                }
                res.push_str(&dijkstra.stats.to_string());
                res
            }
            Err(e) => format!("Invalid index: {}", e),
        }
    }

    /// Runs `n` searches between random vertex pairs and reports their timings
    fn measure<R: Rng>(&self, n: usize, rng: &mut R) -> String {
        let num_vertices = self.graph.num_vertices();
        if num_vertices == 0 {
            return "Graph is empty".to_string();
        }

        let pb = ProgressBar::new(n as u64);
        let mut res = String::new();

        for _ in 0..n {
            let src = rng.gen_range(0..num_vertices);
            let dst = rng.gen_range(0..num_vertices);

            let mut dijkstra = Dijkstra::new(self.graph.matrix());
            match dijkstra.search(src.into(), dst.into()) {
                Ok(PathResult::Found(_)) => {
                    let _ = writeln!(res, "{} -> {}: {:?}", src, dst, dijkstra.stats.duration);
                }
                Ok(PathResult::NoPath) => {
                    let _ = writeln!(res, "{} -> {}: no path", src, dst);
                }
                Err(e) => warn!("Skipping {} -> {}: {}", src, dst, e),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        res
    }

    fn add_vertex(&mut self, x: f64, y: f64) -> String {
        match self.graph.add_vertex(x, y) {
            Ok(idx) => format!("Added vertex {} at ({:.2}, {:.2})", idx, x, y),
            Err(e) => format!("Could not add vertex: {}", e),
        }
    }

    fn add_edge(&mut self, a: usize, b: usize) -> String {
        match self.graph.add_edge(a.into(), b.into()) {
            Ok(true) => match self.graph.matrix().weight(a.into(), b.into()) {
                Some(w) => format!("Added edge {}-{} (distance: {:.2})", a, b, w),
                None => format!("Added edge {}-{}", a, b),
            },
            Ok(false) => format!("Edge {}-{} already exists", a, b),
            Err(e) => format!("Could not add edge: {}", e),
        }
    }

    fn remove_vertex(&mut self, idx: usize) -> String {
        match self.graph.remove_vertex(idx.into()) {
            Ok(v) => format!("Removed vertex {} (id {})", idx, v.id),
            Err(e) => format!("Could not remove vertex: {}", e),
        }
    }

    fn remove_edge(&mut self, a: usize, b: usize) -> String {
        match self.graph.remove_edge(a.into(), b.into()) {
            Ok(()) => format!("Removed edge {}-{}", a, b),
            Err(e) => format!("Could not remove edge: {}", e),
        }
    }
}

fn index_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_parser(value_parser!(usize))
        .required(true)
        .help(help)
}

fn coordinate_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_parser(value_parser!(f64))
        .required(true)
        .allow_negative_numbers(true)
        .help(help)
}

fn file_arg() -> Arg {
    Arg::new("file")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Path to a .poly file")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph
    let graph = match std::env::args().nth(1) {
        Some(path_to_poly) => Graph::from_poly(Path::new(&path_to_poly))?,
        None => sample_cycle_graph()?,
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to edit planar graphs and search shortest paths")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("load")
                .arg(file_arg())
                .about("Replace the graph with the contents of a .poly file"),
            load,
        )
        .with_command(
            Command::new("save")
                .arg(file_arg())
                .about("Write the graph to a .poly file"),
            save,
        )
        .with_command(
            Command::new("dijk")
                .arg(index_arg("src", "Index of source vertex"))
                .arg(index_arg("dst", "Index of destination vertex"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("dists")
                .arg(index_arg("src", "Index of source vertex"))
                .about("Distances from a vertex to all other vertices"),
            run_distances,
        )
        .with_command(
            Command::new("dijkm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        )
        .with_command(
            Command::new("addv")
                .arg(coordinate_arg("x", "X coordinate"))
                .arg(coordinate_arg("y", "Y coordinate"))
                .about("Add a vertex"),
            add_vertex,
        )
        .with_command(
            Command::new("adde")
                .arg(index_arg("a", "Index of first vertex"))
                .arg(index_arg("b", "Index of second vertex"))
                .about("Add an edge, weighted by the distance of its endpoints"),
            add_edge,
        )
        .with_command(
            Command::new("rmv")
                .arg(index_arg("idx", "Index of vertex"))
                .about("Remove a vertex and its edges"),
            remove_vertex,
        )
        .with_command(
            Command::new("rme")
                .arg(index_arg("a", "Index of first vertex"))
                .arg(index_arg("b", "Index of second vertex"))
                .about("Remove an edge"),
            remove_edge,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{}", e))
}
