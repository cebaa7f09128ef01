use crate::config::resolve::CliOverrides;
use crate::config::ResolvedConfig;
use crate::errors::{RelmatError, Result};
use crate::graph::builder::{RelationMatrixBuilder, Relations};
use crate::graph::index::VertexIndex;
use crate::graph::ir::{Edge, Vertex};
use crate::output::OutputFormat;
use crate::parse::edges::{parse_edges, parse_root};
use crate::parse::load_input;
use clap::Args;

/// Input shared by `matrices` and `entropy`.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Edge file (one "parent,child" per line) or literal edge text such as "1,2\n1,3".
    /// Defaults to the configured sample file.
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Root vertex id (defaults to the configured root)
    #[arg(allow_negative_numbers = true)]
    pub root: Option<String>,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Vertex count at which the closure relaxes rows in parallel
    #[arg(long)]
    pub parallel_threshold: Option<usize>,
}

/// Parsed edges plus the root they hang from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    pub edges: Vec<Edge>,
    pub root: Vertex,
}

impl InputArgs {
    pub fn to_cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format,
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Read and parse the edges and root, falling back to configured defaults.
    pub fn load(&self, config: &ResolvedConfig) -> Result<Hierarchy> {
        let text = match &self.input {
            Some(arg) => load_input(arg)?,
            None => {
                let path = &config.default_input;
                if !path.is_file() {
                    return Err(RelmatError::InputNotFound { path: path.clone() });
                }
                tracing::info!("No input given, reading {}", path.display());
                std::fs::read_to_string(path)?
            }
        };
        let root_token = self.root.as_deref().unwrap_or(&config.default_root);

        Ok(Hierarchy {
            edges: parse_edges(&text)?,
            root: parse_root(root_token)?,
        })
    }
}

impl Hierarchy {
    pub fn relations(&self, config: &ResolvedConfig) -> Relations {
        let index = VertexIndex::new(&self.edges, self.root);
        RelationMatrixBuilder::new()
            .with_parallel_threshold(config.parallel_threshold)
            .build(&self.edges, &index)
    }
}
