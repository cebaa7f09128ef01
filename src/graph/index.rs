use crate::graph::ir::{Edge, Vertex};
use std::collections::{BTreeMap, BTreeSet};

/// Dense, deterministic index over every vertex named by the edges or the root.
///
/// Labels are the distinct vertex IDs in ascending order; a vertex's index is
/// its position in that list. The root is always present, even when no edge
/// touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexIndex {
    labels: Vec<Vertex>,
    by_vertex: BTreeMap<Vertex, usize>,
}

impl VertexIndex {
    pub fn new(edges: &[Edge], root: Vertex) -> Self {
        let mut vertices: BTreeSet<Vertex> = BTreeSet::new();
        for edge in edges {
            vertices.insert(edge.parent);
            vertices.insert(edge.child);
        }
        vertices.insert(root);

        let labels: Vec<Vertex> = vertices.into_iter().collect();
        let by_vertex = labels.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Self { labels, by_vertex }
    }

    /// Vertex IDs in index order (ascending).
    pub fn labels(&self) -> &[Vertex] {
        &self.labels
    }

    pub fn index_of(&self, vertex: Vertex) -> Option<usize> {
        self.by_vertex.get(&vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true: the root guarantees at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
