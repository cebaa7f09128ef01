pub mod provenance;
pub mod resolve;
pub mod schema;
pub mod show;

use crate::errors::{RelmatError, Result};
use crate::output::OutputFormat;
use provenance::ProvenanceMap;
use std::path::PathBuf;

/// Fully resolved configuration; every field has a value.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    // Operational
    pub format: String,
    pub default_input: PathBuf,
    pub default_root: String,

    // Closure
    pub parallel_threshold: usize,

    // Provenance
    pub provenance: ProvenanceMap,
    pub loaded_files: Vec<PathBuf>,
}

impl ResolvedConfig {
    /// Output format, validated. File and env layers carry it as free text.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse().map_err(RelmatError::Config)
    }
}
