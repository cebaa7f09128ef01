use crate::graph::index::VertexIndex;
use crate::graph::ir::{Edge, RelationKind, Vertex};
use crate::graph::matrix::RelationMatrix;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Vertex count at which the closure starts relaxing rows in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// The five predicate matrices for one hierarchy, plus the closure they were
/// derived from. All matrices share the ordering of `labels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relations {
    pub labels: Vec<Vertex>,
    /// r1: a direct edge i -> j exists.
    pub direct: RelationMatrix,
    /// r2: transpose of r1.
    pub direct_inverse: RelationMatrix,
    /// r3: j reachable from i, but not by a direct edge.
    pub indirect: RelationMatrix,
    /// r4: transpose of r3.
    pub indirect_inverse: RelationMatrix,
    /// r5: i != j and both share at least one direct parent.
    pub siblings: RelationMatrix,
    /// Paths of length >= 1 over r1.
    pub reach: RelationMatrix,
}

impl Relations {
    pub fn matrix(&self, kind: RelationKind) -> &RelationMatrix {
        match kind {
            RelationKind::DirectManagement => &self.direct,
            RelationKind::DirectSubordination => &self.direct_inverse,
            RelationKind::IndirectManagement => &self.indirect,
            RelationKind::IndirectSubordination => &self.indirect_inverse,
            RelationKind::CoSubordination => &self.siblings,
        }
    }

    /// r1..r5 in order.
    pub fn matrices(&self) -> [(RelationKind, &RelationMatrix); 5] {
        RelationKind::ALL.map(|kind| (kind, self.matrix(kind)))
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }
}

/// Derives [`Relations`] from a direct-edge list.
#[derive(Debug, Clone)]
pub struct RelationMatrixBuilder {
    parallel_threshold: usize,
}

impl RelationMatrixBuilder {
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn build(&self, edges: &[Edge], index: &VertexIndex) -> Relations {
        let n = index.len();
        let mut direct = RelationMatrix::new(n);
        let mut children_by_parent: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();

        for edge in edges {
            let (Some(parent), Some(child)) =
                (index.index_of(edge.parent), index.index_of(edge.child))
            else {
                tracing::debug!(
                    "Skipping edge {} -> {} outside the vertex index",
                    edge.parent,
                    edge.child
                );
                continue;
            };
            direct.set(parent, child);
            children_by_parent.entry(parent).or_default().insert(child);
        }

        let direct_inverse = direct.transpose();
        let reach = reachability(&direct, self.parallel_threshold);
        let indirect = reach.and_not(&direct);
        let indirect_inverse = indirect.transpose();
        let siblings = sibling_matrix(n, &children_by_parent);

        tracing::debug!(
            vertices = n,
            direct = direct.count_true(),
            indirect = indirect.count_true(),
            siblings = siblings.count_true(),
            "Built relation matrices"
        );

        Relations {
            labels: index.labels().to_vec(),
            direct,
            direct_inverse,
            indirect,
            indirect_inverse,
            siblings,
            reach,
        }
    }
}

impl Default for RelationMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Index the edges (plus `root`) and build all relations with default settings.
pub fn build_relations(edges: &[Edge], root: Vertex) -> Relations {
    let index = VertexIndex::new(edges, root);
    RelationMatrixBuilder::new().build(edges, &index)
}

/// Transitive closure of `direct` (paths of length >= 1).
///
/// Stage `k` admits `k` as an intermediate vertex. Within a stage every row is
/// relaxed independently against a snapshot of row `k`, so rows may be
/// processed in parallel; stages themselves run strictly in sequence.
pub fn reachability(direct: &RelationMatrix, parallel_threshold: usize) -> RelationMatrix {
    let n = direct.dim();
    let mut reach = direct.clone();
    if n == 0 {
        return reach;
    }

    let parallel = n >= parallel_threshold;
    tracing::debug!(vertices = n, parallel, "Computing reachability closure");

    for k in 0..n {
        let via_k: Vec<bool> = reach.row(k).to_vec();
        if !via_k.iter().any(|&c| c) {
            continue;
        }
        let relax = |row: &mut [bool]| {
            if row[k] {
                for (cell, &through) in row.iter_mut().zip(&via_k) {
                    if through {
                        *cell = true;
                    }
                }
            }
        };
        if parallel {
            reach.cells_mut().par_chunks_mut(n).for_each(relax);
        } else {
            reach.cells_mut().chunks_mut(n).for_each(relax);
        }
    }

    reach
}

fn sibling_matrix(
    n: usize,
    children_by_parent: &BTreeMap<usize, BTreeSet<usize>>,
) -> RelationMatrix {
    let mut siblings = RelationMatrix::new(n);
    for children in children_by_parent.values() {
        for &a in children {
            for &b in children {
                if a != b {
                    siblings.set(a, b);
                }
            }
        }
    }
    siblings
}
