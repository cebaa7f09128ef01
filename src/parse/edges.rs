use crate::errors::{RelmatError, Result};
use crate::graph::ir::{Edge, Vertex};

/// Parse `parent,child` lines into edges.
///
/// Text passed through a shell often carries literal `\n` sequences instead
/// of newlines; those are expanded when the text has no real newline.
/// Blank lines are skipped and fields are trimmed.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let mut text = text.trim().to_string();
    if text.contains("\\n") && !text.contains('\n') {
        text = text.replace("\\n", "\n");
    }

    let mut edges = Vec::new();
    for (line_no, line) in text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let line_no = line_no + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [parent, child] = fields.as_slice() else {
            return Err(RelmatError::InvalidEdgeLine {
                line_no,
                line: line.to_string(),
            });
        };
        let parse_vertex = |field: &str| -> Result<Vertex> {
            field.parse().map_err(|_| RelmatError::NonIntegerVertex {
                line_no,
                line: line.to_string(),
            })
        };
        edges.push(Edge::new(parse_vertex(parent)?, parse_vertex(child)?));
    }

    tracing::debug!("Parsed {} edges", edges.len());
    Ok(edges)
}

/// Parse the root vertex token.
pub fn parse_root(token: &str) -> Result<Vertex> {
    token
        .trim()
        .parse()
        .map_err(|_| RelmatError::InvalidRoot {
            token: token.to_string(),
        })
}
