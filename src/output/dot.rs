use crate::errors::Result;
use crate::graph::builder::Relations;
use crate::graph::ir::Vertex;
use petgraph::graph::DiGraph;
use std::io::Write;

/// Hierarchy graph of the direct relation: one node per vertex label, one
/// edge per true r1 cell.
pub fn direct_graph(relations: &Relations) -> DiGraph<Vertex, ()> {
    let mut graph =
        DiGraph::with_capacity(relations.vertex_count(), relations.direct.count_true());
    let nodes: Vec<_> = relations
        .labels
        .iter()
        .map(|&label| graph.add_node(label))
        .collect();
    for (i, j) in relations.direct.true_cells() {
        graph.add_edge(nodes[i], nodes[j], ());
    }
    graph
}

/// Write the direct relation in Graphviz DOT format.
pub fn write_dot<W: Write>(writer: &mut W, relations: &Relations) -> Result<()> {
    let graph = direct_graph(relations);

    writeln!(writer, "digraph hierarchy {{")?;
    writeln!(writer, "    rankdir=TB;")?;
    writeln!(
        writer,
        "    node [shape=box, style=filled, fillcolor=lightblue];"
    )?;
    writeln!(writer)?;

    for idx in graph.node_indices() {
        writeln!(writer, "    \"{}\";", graph[idx])?;
    }
    writeln!(writer)?;

    for edge in graph.raw_edges() {
        writeln!(
            writer,
            "    \"{}\" -> \"{}\";",
            graph[edge.source()],
            graph[edge.target()]
        )?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}
