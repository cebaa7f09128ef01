use crate::errors::Result;
use crate::graph::builder::Relations;
use crate::graph::ir::{RelationKind, Vertex};
use crate::graph::matrix::RelationMatrix;
use crate::metrics::entropy::EntropyReport;
use std::io::Write;

/// Write every relation as a titled, labeled 0/1 table.
///
/// `separator` is `'\t'` for text output and `','` for CSV; CSV leaves the
/// corner cell empty.
pub fn write_relations_table<W: Write>(
    writer: &mut W,
    relations: &Relations,
    separator: char,
) -> Result<()> {
    for (kind, matrix) in relations.matrices() {
        writeln!(writer, "{kind}")?;
        write_matrix(writer, matrix, &relations.labels, separator)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Write one matrix with row and column headers.
pub fn write_matrix<W: Write>(
    writer: &mut W,
    matrix: &RelationMatrix,
    labels: &[Vertex],
    separator: char,
) -> Result<()> {
    let sep = separator.to_string();
    let corner = if separator == ',' { "" } else { " " };

    let mut header = vec![corner.to_string()];
    header.extend(labels.iter().map(|l| l.to_string()));
    writeln!(writer, "{}", header.join(&sep))?;

    for (label, row) in labels.iter().zip(matrix.rows()) {
        let mut cells = vec![label.to_string()];
        cells.extend(row.iter().map(|&c| if c { "1" } else { "0" }.to_string()));
        writeln!(writer, "{}", cells.join(&sep))?;
    }
    Ok(())
}

/// Write the entropy report as human-readable text.
pub fn write_entropy_text<W: Write>(writer: &mut W, report: &EntropyReport) -> Result<()> {
    writeln!(writer, "Counts per relation:")?;
    for (i, kind) in RelationKind::ALL.iter().enumerate() {
        writeln!(
            writer,
            "  {}: {} ({:.6})",
            kind.short_name(),
            report.counts[i],
            report.probabilities[i]
        )?;
    }
    writeln!(writer, "Entropy (bits): {:.6}", report.entropy_bits)?;
    writeln!(writer, "Normalized entropy: {:.6}", report.normalized_entropy)?;
    Ok(())
}

/// Write the entropy report as CSV rows.
pub fn write_entropy_csv<W: Write>(writer: &mut W, report: &EntropyReport) -> Result<()> {
    writeln!(writer, "relation,count,probability")?;
    for (i, kind) in RelationKind::ALL.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{:.6}",
            kind.short_name(),
            report.counts[i],
            report.probabilities[i]
        )?;
    }
    writeln!(writer, "entropy_bits,{:.6}", report.entropy_bits)?;
    writeln!(writer, "normalized_entropy,{:.6}", report.normalized_entropy)?;
    Ok(())
}
