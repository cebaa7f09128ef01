use crate::config::provenance::{ProvenanceMap, Source};
use crate::config::schema::FileConfig;
use crate::config::ResolvedConfig;
use crate::errors::{RelmatError, Result};
use crate::graph::builder::DEFAULT_PARALLEL_THRESHOLD;
use crate::output::OutputFormat;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = ".relmat.toml";
pub const DEFAULT_INPUT: &str = "data/hierarchy.csv";
pub const DEFAULT_ROOT: &str = "1";

/// CLI overrides extracted from command arguments.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub parallel_threshold: Option<usize>,
}

/// Resolve configuration by applying layers bottom-up:
/// 1. Built-in defaults
/// 2. User config (~/.config/relmat/config.toml)
/// 3. Project config (nearest .relmat.toml walking up from working_dir)
/// 4. Environment variables
/// 5. CLI overrides
pub fn resolve_config(working_dir: &Path, cli: &CliOverrides) -> Result<ResolvedConfig> {
    let mut prov = ProvenanceMap::new();
    let mut loaded_files = Vec::new();

    let mut config = ResolvedConfig {
        format: OutputFormat::default().to_string(),
        default_input: PathBuf::from(DEFAULT_INPUT),
        default_root: DEFAULT_ROOT.to_string(),
        parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        provenance: ProvenanceMap::new(),
        loaded_files: Vec::new(),
    };
    for key in [
        "defaults.format",
        "defaults.default_input",
        "defaults.default_root",
        "closure.parallel_threshold",
    ] {
        prov.set(key, Source::Default);
    }

    if let Some(user_config_path) = find_user_config() {
        if user_config_path.exists() {
            let file_config = load_file_config(&user_config_path, "user")?;
            apply_file_config(
                &mut config,
                &file_config,
                Source::UserConfig(user_config_path.clone()),
                &mut prov,
            );
            loaded_files.push(user_config_path);
        }
    }

    if let Some(project_config_path) = find_project_config(working_dir) {
        let file_config = load_file_config(&project_config_path, "project")?;
        apply_file_config(
            &mut config,
            &file_config,
            Source::ProjectConfig(project_config_path.clone()),
            &mut prov,
        );
        loaded_files.push(project_config_path);
    }

    apply_env_vars(&mut config, &mut prov);
    apply_cli_overrides(&mut config, cli, &mut prov);

    tracing::debug!(
        format = %config.format,
        parallel_threshold = config.parallel_threshold,
        files = loaded_files.len(),
        "Resolved configuration"
    );

    config.provenance = prov;
    config.loaded_files = loaded_files;
    Ok(config)
}

fn load_file_config(path: &Path, layer: &str) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|_| {
        RelmatError::Config(format!(
            "Could not read {layer} config: {}",
            path.display()
        ))
    })?;
    FileConfig::from_toml(&content)
        .map_err(|e| RelmatError::Config(format!("Invalid {layer} config: {e}")))
}

fn find_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("relmat").join("config.toml"))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(PROJECT_CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn apply_file_config(
    config: &mut ResolvedConfig,
    file: &FileConfig,
    source: Source,
    prov: &mut ProvenanceMap,
) {
    if let Some(ref format) = file.defaults.format {
        config.format = format.clone();
        prov.set("defaults.format", source.clone());
    }
    if let Some(ref input) = file.defaults.default_input {
        config.default_input = PathBuf::from(input);
        prov.set("defaults.default_input", source.clone());
    }
    if let Some(ref root) = file.defaults.default_root {
        config.default_root = root.clone();
        prov.set("defaults.default_root", source.clone());
    }
    if let Some(threshold) = file.closure.parallel_threshold {
        config.parallel_threshold = threshold;
        prov.set("closure.parallel_threshold", source);
    }
}

fn apply_env_vars(config: &mut ResolvedConfig, prov: &mut ProvenanceMap) {
    if let Ok(val) = std::env::var("RELMAT_FORMAT") {
        config.format = val;
        prov.set("defaults.format", Source::EnvVar("RELMAT_FORMAT".into()));
    }
    if let Ok(val) = std::env::var("RELMAT_DEFAULT_INPUT") {
        config.default_input = PathBuf::from(val);
        prov.set(
            "defaults.default_input",
            Source::EnvVar("RELMAT_DEFAULT_INPUT".into()),
        );
    }
    if let Ok(val) = std::env::var("RELMAT_DEFAULT_ROOT") {
        config.default_root = val;
        prov.set(
            "defaults.default_root",
            Source::EnvVar("RELMAT_DEFAULT_ROOT".into()),
        );
    }
    if let Ok(val) = std::env::var("RELMAT_PARALLEL_THRESHOLD") {
        match val.parse::<usize>() {
            Ok(n) => {
                config.parallel_threshold = n;
                prov.set(
                    "closure.parallel_threshold",
                    Source::EnvVar("RELMAT_PARALLEL_THRESHOLD".into()),
                );
            }
            Err(_) => tracing::warn!("Ignoring non-numeric RELMAT_PARALLEL_THRESHOLD={val}"),
        }
    }
}

fn apply_cli_overrides(config: &mut ResolvedConfig, cli: &CliOverrides, prov: &mut ProvenanceMap) {
    if let Some(format) = cli.format {
        config.format = format.to_string();
        prov.set("defaults.format", Source::CliFlag("--format".into()));
    }
    if let Some(threshold) = cli.parallel_threshold {
        config.parallel_threshold = threshold;
        prov.set(
            "closure.parallel_threshold",
            Source::CliFlag("--parallel-threshold".into()),
        );
    }
}
