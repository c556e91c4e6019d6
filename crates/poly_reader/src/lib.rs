use anyhow::{anyhow, bail, Context};
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

/// Identifier of a vertex as it appears in a `.poly` file
pub type VertexId = usize;

pub struct PolyVertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl PolyVertex {
    fn new(id: VertexId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Undirected edge between two vertices, referenced by their position in the file.
pub struct PolyEdge {
    pub source: usize,
    pub target: usize,
    /// Weight stored in the file, if any. Never used for routing.
    pub weight: Option<f64>,
}

impl PolyEdge {
    fn new(source: usize, target: usize, weight: Option<f64>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Planar graph read from (or written to) a `.poly` file.
///
/// ```text
/// <vertex_count>
/// <id> <x> <y>
/// ...
/// <edge_count>
/// <edge_id> <source_id> <target_id> [weight]
/// ...
/// ```
///
/// Blank lines and lines starting with `#` are ignored.
#[derive(Default)]
pub struct PolyGraph {
    vertices: Vec<PolyVertex>,
    edges: Vec<PolyEdge>,
}

impl PolyGraph {
    pub fn new() -> Self {
        PolyGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        PolyGraph {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_edges),
        }
    }

    pub fn add_vertex(&mut self, id: VertexId, x: f64, y: f64) {
        self.vertices.push(PolyVertex::new(id, x, y));
    }

    pub fn add_edge(&mut self, source: usize, target: usize, weight: Option<f64>) {
        self.edges.push(PolyEdge::new(source, target, weight));
    }

    pub fn get_vertices(&self) -> &Vec<PolyVertex> {
        &self.vertices
    }

    pub fn get_edges(&self) -> &Vec<PolyEdge> {
        &self.edges
    }

    /// Euclidean length of `edge`, or `None` if it references a missing vertex.
    pub fn edge_length(&self, edge: &PolyEdge) -> Option<f64> {
        let a = self.vertices.get(edge.source)?;
        let b = self.vertices.get(edge.target)?;
        Some(((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt())
    }

    pub fn from_path(poly_path: &Path) -> anyhow::Result<PolyGraph> {
        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", poly_path.display());

        let content = std::fs::read_to_string(poly_path)
            .with_context(|| format!("Could not read {}", poly_path.display()))?;
        let graph = content
            .parse::<PolyGraph>()
            .with_context(|| format!("Could not parse {}", poly_path.display()))?;

        info!("FINISHED parsing. Took {:?}", now.elapsed());
        info!(
            "Graph has {} vertices and {} edges",
            graph.vertices.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// Writes the graph in the same format the parser accepts.
    /// Edges are renumbered from 0 and carry their Euclidean length.
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(writer, "{} {}", self.vertices.len(), self.edges.len())?;
        for vertex in &self.vertices {
            writeln!(writer, "{} {} {}", vertex.id, vertex.x, vertex.y)?;
        }

        writeln!(writer, "{}", self.edges.len())?;
        for (i, edge) in self.edges.iter().enumerate() {
            let (source, target) = (self.vertex_id(edge.source)?, self.vertex_id(edge.target)?);
            let length = self
                .edge_length(edge)
                .ok_or_else(|| anyhow!("Edge {i} references a missing vertex"))?;
            writeln!(writer, "{i} {source} {target} {length}")?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_path(&self, poly_path: &Path) -> anyhow::Result<()> {
        debug!("BEGIN writing {}", poly_path.display());
        let file = File::create(poly_path)
            .with_context(|| format!("Could not create {}", poly_path.display()))?;
        self.write(BufWriter::new(file))?;
        debug!("FINISHED writing {}", poly_path.display());
        Ok(())
    }

    fn vertex_id(&self, index: usize) -> anyhow::Result<VertexId> {
        self.vertices
            .get(index)
            .map(|v| v.id)
            .ok_or_else(|| anyhow!("Vertex index {index} does not exist"))
    }
}

impl FromStr for PolyGraph {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let num_vertices: usize = parse_count(&mut lines, "vertex count")?;
        let mut vertex_index: FxHashMap<VertexId, usize> =
            FxHashMap::with_capacity_and_hasher(num_vertices, Default::default());
        let mut graph = PolyGraph::with_capacity(num_vertices, 0);

        for _ in 0..num_vertices {
            let (line_no, line) = next_line(&mut lines, "vertex")?;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.len() < 3 {
                bail!("Line {line_no}: expected `<id> <x> <y>`, got {line:?}");
            }

            let id: VertexId = parse_field(fields[0], line_no, "vertex id")?;
            let x: f64 = parse_field(fields[1], line_no, "x coordinate")?;
            let y: f64 = parse_field(fields[2], line_no, "y coordinate")?;

            if vertex_index.insert(id, graph.vertices.len()).is_some() {
                bail!("Line {line_no}: duplicate vertex id {id}");
            }
            graph.add_vertex(id, x, y);
        }

        let num_edges: usize = parse_count(&mut lines, "edge count")?;
        graph.edges.reserve(num_edges);

        for _ in 0..num_edges {
            let (line_no, line) = next_line(&mut lines, "edge")?;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.len() < 3 {
                bail!("Line {line_no}: expected `<edge_id> <source> <target> [weight]`, got {line:?}");
            }

            let _edge_id: usize = parse_field(fields[0], line_no, "edge id")?;
            let endpoint = |field: &str| -> anyhow::Result<usize> {
                let id: VertexId = parse_field(field, line_no, "vertex id")?;
                vertex_index
                    .get(&id)
                    .copied()
                    .ok_or_else(|| anyhow!("Line {line_no}: edge references unknown vertex id {id}"))
            };
            let source = endpoint(fields[1])?;
            let target = endpoint(fields[2])?;
            let weight = fields
                .get(3)
                .map(|w| parse_field::<f64>(w, line_no, "edge weight"))
                .transpose()?;

            graph.add_edge(source, target, weight);
        }

        let trailing = lines.count();
        if trailing > 0 {
            debug!("Ignoring {trailing} trailing lines after the edge section");
        }

        Ok(graph)
    }
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> anyhow::Result<(usize, &'a str)> {
    lines
        .next()
        .ok_or_else(|| anyhow!("Unexpected end of file while reading {what}"))
}

/// Reads a section header. Only the first token is meaningful.
fn parse_count<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> anyhow::Result<usize> {
    let (line_no, line) = next_line(lines, what)?;
    let token = line.split_whitespace().next().unwrap_or_default();
    parse_field(token, line_no, what)
}

fn parse_field<T>(field: &str, line_no: usize, what: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field
        .parse::<T>()
        .with_context(|| format!("Line {line_no}: invalid {what} {field:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "\
# unit square with one diagonal
4 5
10 0 0
11 1 0
12 1 1
13 0 1

5
0 10 11
1 11 12 1.0
2 12 13
3 13 10
4 10 12 99.0
";

    #[test]
    fn read_square() {
        let g: PolyGraph = SQUARE.parse().unwrap();

        assert_eq!(g.get_vertices().len(), 4);
        assert_eq!(g.get_edges().len(), 5);
        assert_eq!(g.get_vertices()[2].id, 12);

        // Endpoints are mapped from ids to positions
        let diagonal = &g.get_edges()[4];
        assert_eq!((diagonal.source, diagonal.target), (0, 2));
        assert_eq!(diagonal.weight, Some(99.0));
        assert_eq!(g.get_edges()[0].weight, None);

        let length = g.edge_length(diagonal).unwrap();
        assert!((length - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn read_from_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/triangle.poly");
        let g = PolyGraph::from_path(&path).unwrap();

        assert_eq!(g.get_vertices().len(), 3);
        assert_eq!(g.get_edges().len(), 2);
    }

    #[test]
    fn unknown_vertex_id() {
        let err = "2\n0 0 0\n1 1 1\n1\n0 0 7\n"
            .parse::<PolyGraph>()
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown vertex id 7"));
    }

    #[test]
    fn duplicate_vertex_id() {
        let err = "2\n0 0 0\n0 1 1\n0\n".parse::<PolyGraph>().err().unwrap();
        assert!(err.to_string().contains("duplicate vertex id 0"));
    }

    #[test]
    fn truncated_file() {
        assert!("3\n0 0 0\n1 1 1\n".parse::<PolyGraph>().is_err());
        assert!("2\n0 0 0\n1 1 1\n".parse::<PolyGraph>().is_err());
        assert!("1\n0 zero 0\n0\n".parse::<PolyGraph>().is_err());
    }

    #[test]
    fn written_file_can_be_read_back() {
        let g: PolyGraph = SQUARE.parse().unwrap();

        let mut buffer = Vec::new();
        g.write(&mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        let h: PolyGraph = written.parse().unwrap();

        assert_eq!(h.get_vertices().len(), 4);
        assert_eq!(h.get_edges().len(), 5);
        // Stored weights are replaced with the real lengths
        assert_eq!(h.get_edges()[4].weight, g.edge_length(&g.get_edges()[4]));
        assert!(written.starts_with("4 5\n10 0 0\n"));
    }
}
