//! Relation matrices over a parent/child hierarchy and the entropy of their
//! distribution.
//!
//! ```
//! use relmat::graph::builder::build_relations;
//! use relmat::graph::ir::Edge;
//! use relmat::metrics::entropy::EntropyReport;
//!
//! let relations = build_relations(&[Edge::new(1, 2), Edge::new(1, 3)], 1);
//! assert!(relations.siblings.get(1, 2));
//!
//! let report = EntropyReport::from_relations(&relations);
//! assert_eq!(report.counts, [2, 2, 0, 0, 2]);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod metrics;
pub mod output;
pub mod parse;
