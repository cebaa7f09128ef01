use serde::Serialize;

/// Vertex identifier as it appears in the input.
pub type Vertex = i64;

/// Directed parent -> child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub parent: Vertex,
    pub child: Vertex,
}

impl Edge {
    pub fn new(parent: Vertex, child: Vertex) -> Self {
        Self { parent, child }
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((parent, child): (Vertex, Vertex)) -> Self {
        Self { parent, child }
    }
}

/// The five predicate relations derived from the direct-edge matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    DirectManagement,
    DirectSubordination,
    IndirectManagement,
    IndirectSubordination,
    CoSubordination,
}

impl RelationKind {
    pub const ALL: [RelationKind; 5] = [
        RelationKind::DirectManagement,
        RelationKind::DirectSubordination,
        RelationKind::IndirectManagement,
        RelationKind::IndirectSubordination,
        RelationKind::CoSubordination,
    ];

    /// Short name (`r1`..`r5`).
    pub fn short_name(self) -> &'static str {
        match self {
            RelationKind::DirectManagement => "r1",
            RelationKind::DirectSubordination => "r2",
            RelationKind::IndirectManagement => "r3",
            RelationKind::IndirectSubordination => "r4",
            RelationKind::CoSubordination => "r5",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RelationKind::DirectManagement => "direct management",
            RelationKind::DirectSubordination => "direct subordination",
            RelationKind::IndirectManagement => "indirect management",
            RelationKind::IndirectSubordination => "indirect subordination",
            RelationKind::CoSubordination => "co-subordination (shared parent)",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.short_name(), self.title())
    }
}
