//! src/parse.rs
//!
//! Parser for the graph description format.
//!
//! A graph file is UTF-8 text, one item per line:
//!
//! ```text
//! // comment lines start with `//` and are ignored, as are blank lines
//! MyGraph              <- first surviving line: display name of the graph
//! A -- B 5             <- edge: origin, `--`, destination, integer weight
//! B -- C 2
//! D                    <- any line without `--`: an isolated vertex
//! ```
//!
//! Parsing is kept free of any rendering or terminal concerns so it can be
//! tested on plain strings. Any malformed edge line aborts the whole parse
//! with an error naming the line; there is no partial-result mode.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};

/// Two-character prefix marking a comment line.
const COMMENT_MARKER: &str = "//";

/// Two-character token separating the endpoints of an edge line.
const EDGE_SEPARATOR: &str = "--";

/// One declared edge, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeDecl {
    pub origin: String,
    pub destination: String,
    pub weight: i64,
}

/// Everything a graph file declares.
///
/// `edges` preserves declaration order; `isolated` is a set (uniqueness
/// enforced, order irrelevant). Vertices that only appear inside edges are
/// not listed here; the builder materializes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphDescription {
    pub name: Option<String>,
    pub edges: Vec<EdgeDecl>,
    pub isolated: BTreeSet<String>,
}

impl GraphDescription {
    /// Display title: the declared name, or a generic fallback.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("Graph")
    }
}

/// Read and parse a graph description file.
pub fn load(path: &Path) -> Result<GraphDescription> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading graph file {}", path.display()))?;
    parse(&text).wrap_err_with(|| format!("parsing graph file {}", path.display()))
}

/// Parse a graph description from text.
///
/// Deterministic: the same input always yields the same description.
pub fn parse(text: &str) -> Result<GraphDescription> {
    let mut desc = GraphDescription::default();
    let mut saw_name = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        if !saw_name {
            // The first surviving line names the graph; it is not a vertex.
            desc.name = Some(line.to_string());
            saw_name = true;
            continue;
        }
        if line.contains(EDGE_SEPARATOR) {
            let edge = parse_edge_line(line)
                .wrap_err_with(|| format!("bad edge declaration on line {}: {:?}", idx + 1, line))?;
            desc.edges.push(edge);
        } else {
            desc.isolated.insert(line.to_string());
        }
    }

    Ok(desc)
}

/// Parse one edge line: `<origin> -- <destination> <weight>`.
///
/// Tokens past the weight are ignored, matching the original format.
fn parse_edge_line(line: &str) -> Result<EdgeDecl> {
    let mut tokens = line.split_whitespace();

    let Some(origin) = tokens.next() else {
        bail!("missing origin vertex");
    };
    let Some(sep) = tokens.next() else {
        bail!("missing `--` separator");
    };
    if sep != EDGE_SEPARATOR {
        bail!("expected `--` after origin, found {:?}", sep);
    }
    let Some(destination) = tokens.next() else {
        bail!("missing destination vertex");
    };
    let Some(weight) = tokens.next() else {
        bail!("missing edge weight");
    };
    let weight: i64 = weight
        .parse()
        .wrap_err_with(|| format!("edge weight {:?} is not an integer", weight))?;

    Ok(EdgeDecl {
        origin: origin.to_string(),
        destination: destination.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(origin: &str, destination: &str, weight: i64) -> EdgeDecl {
        EdgeDecl {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight,
        }
    }

    #[test]
    fn parses_name_edges_and_isolated_vertices() {
        let desc = parse("MyGraph\nA -- B 5\nB -- C 2\nD\n").unwrap();
        assert_eq!(desc.name.as_deref(), Some("MyGraph"));
        assert_eq!(desc.edges, vec![edge("A", "B", 5), edge("B", "C", 2)]);
        assert_eq!(desc.isolated, BTreeSet::from(["D".to_string()]));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "\n// header comment\n\nMyGraph\n\n// an edge follows\nA -- B 5\n\n  // indented comment\nD\n";
        let desc = parse(text).unwrap();
        assert_eq!(desc.name.as_deref(), Some("MyGraph"));
        assert_eq!(desc.edges, vec![edge("A", "B", 5)]);
        assert_eq!(desc.isolated, BTreeSet::from(["D".to_string()]));
    }

    #[test]
    fn preserves_edge_declaration_order() {
        let desc = parse("G\nz -- a 1\na -- m 2\nm -- z 3\n").unwrap();
        let origins: Vec<&str> = desc.edges.iter().map(|e| e.origin.as_str()).collect();
        assert_eq!(origins, vec!["z", "a", "m"]);
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "G\nA -- B 5\nC\nC\nB -- D -7\n";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn accepts_negative_and_zero_weights() {
        let desc = parse("G\nA -- B 0\nB -- C -12\n").unwrap();
        assert_eq!(desc.edges, vec![edge("A", "B", 0), edge("B", "C", -12)]);
    }

    #[test]
    fn isolated_vertices_are_deduplicated() {
        let desc = parse("G\nD\nD\nE\n").unwrap();
        assert_eq!(
            desc.isolated,
            BTreeSet::from(["D".to_string(), "E".to_string()])
        );
    }

    #[test]
    fn name_only_file_yields_empty_description() {
        let desc = parse("JustAName\n").unwrap();
        assert_eq!(desc.name.as_deref(), Some("JustAName"));
        assert!(desc.edges.is_empty());
        assert!(desc.isolated.is_empty());
    }

    #[test]
    fn empty_file_has_no_name_and_generic_title() {
        let desc = parse("").unwrap();
        assert_eq!(desc.name, None);
        assert_eq!(desc.title(), "Graph");
    }

    #[test]
    fn missing_destination_is_an_error() {
        // `A -- 5`: "5" lands in the destination slot, the weight is missing.
        let err = parse("G\nA -- 5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn non_integer_weight_is_an_error() {
        assert!(parse("G\nA -- B heavy\n").unwrap_err().to_string().contains("line 2"));
    }

    #[test]
    fn separator_without_whitespace_is_an_error() {
        // Contains `--`, so it is classified as an edge line, then rejected.
        assert!(parse("G\nA--B 5\n").unwrap_err().to_string().contains("line 2"));
    }

    #[test]
    fn trailing_tokens_after_weight_are_ignored() {
        let desc = parse("G\nA -- B 5 extra tokens\n").unwrap();
        assert_eq!(desc.edges, vec![edge("A", "B", 5)]);
    }
}
