use crate::config::resolve::{resolve_config, CliOverrides};
use crate::errors::{RelmatError, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show resolved configuration with provenance
    Show {
        /// Working directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    match &args.action {
        ConfigAction::Show { path } => {
            let working_dir = resolve_working_dir(path.as_deref())?;
            let config = resolve_config(&working_dir, &CliOverrides::default())?;
            let mut stdout = std::io::stdout();
            crate::config::show::render_show(&mut stdout, &config)?;
        }
    }
    Ok(())
}

fn resolve_working_dir(path: Option<&std::path::Path>) -> Result<PathBuf> {
    let p = path.map_or_else(|| PathBuf::from("."), PathBuf::from);
    p.canonicalize()
        .map_err(|_| RelmatError::Config(format!("Invalid path: {}", p.display())))
}
