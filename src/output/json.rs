use crate::errors::Result;
use crate::graph::builder::Relations;
use crate::graph::ir::{RelationKind, Vertex};
use crate::metrics::entropy::EntropyReport;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct RelationsOutput {
    pub vertices: Vec<Vertex>,
    pub relations: Vec<RelationEntry>,
}

#[derive(Debug, Serialize)]
pub struct RelationEntry {
    pub name: &'static str,
    pub kind: RelationKind,
    pub title: &'static str,
    pub count: usize,
    /// Rows of 0/1 cells in vertex order.
    pub matrix: Vec<Vec<u8>>,
}

#[derive(Debug, Serialize)]
pub struct EntropyOutput<'a> {
    pub relations: Vec<&'static str>,
    #[serde(flatten)]
    pub report: &'a EntropyReport,
    pub max_entropy_bits: f64,
}

impl RelationsOutput {
    pub fn new(relations: &Relations) -> Self {
        let entries = relations
            .matrices()
            .into_iter()
            .map(|(kind, matrix)| RelationEntry {
                name: kind.short_name(),
                kind,
                title: kind.title(),
                count: matrix.count_true(),
                matrix: matrix
                    .rows()
                    .map(|row| row.iter().map(|&c| u8::from(c)).collect())
                    .collect(),
            })
            .collect();
        Self {
            vertices: relations.labels.clone(),
            relations: entries,
        }
    }
}

/// Write the relation matrices as JSON.
pub fn write_relations_json<W: Write>(writer: &mut W, relations: &Relations) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &RelationsOutput::new(relations))?;
    writeln!(writer)?;
    Ok(())
}

/// Write the entropy report as JSON.
pub fn write_entropy_json<W: Write>(writer: &mut W, report: &EntropyReport) -> Result<()> {
    let output = EntropyOutput {
        relations: RelationKind::ALL.iter().map(|k| k.short_name()).collect(),
        report,
        max_entropy_bits: crate::metrics::entropy::max_entropy_bits(),
    };
    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    Ok(())
}
