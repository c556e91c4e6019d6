use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Shortest path between two vertices of a planar graph", long_about = None)]
struct Cli {
    /// Path to a .poly file. The built-in sample graph is used if omitted
    #[arg(short, long, value_name = "FILE")]
    poly: Option<PathBuf>,

    /// Index of the source vertex. Asked for on stdin if omitted
    source: Option<usize>,

    /// Index of the target vertex. Asked for on stdin if omitted
    target: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub poly_file: Option<PathBuf>,
    pub source: Option<usize>,
    pub target: Option<usize>,
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        Cfg {
            poly_file: self.poly,
            source: self.source,
            target: self.target,
        }
    }
}

/// Parses the process arguments, exits with a usage message on error
pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?.into_cfg())
}

/// Parses a vertex index typed by the user, surrounding whitespace allowed
pub fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sample_graph() {
        let cfg = try_parse_from(["route"]).unwrap();
        assert_eq!(
            cfg,
            Cfg {
                poly_file: None,
                source: None,
                target: None
            }
        );
    }

    #[test]
    fn poly_file_and_vertices() {
        let cfg = try_parse_from(["route", "--poly", "graph.poly", "3", "12"]).unwrap();
        assert_eq!(cfg.poly_file, Some(PathBuf::from("graph.poly")));
        assert_eq!(cfg.source, Some(3));
        assert_eq!(cfg.target, Some(12));
    }

    #[test]
    fn rejects_negative_index() {
        assert!(try_parse_from(["route", "-p", "graph.poly", "--", "-1", "2"]).is_err());
        assert!(try_parse_from(["route", "a", "2"]).is_err());
    }

    #[test]
    fn index_from_user_input() {
        assert_eq!(parse_index(" 3 \n"), Some(3));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1.5"), None);
    }
}
