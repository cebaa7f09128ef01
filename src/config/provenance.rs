use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Default,
    UserConfig(PathBuf),
    ProjectConfig(PathBuf),
    EnvVar(String),
    CliFlag(String),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::UserConfig(path) => write!(f, "user config ({})", path.display()),
            Source::ProjectConfig(path) => write!(f, "project config ({})", path.display()),
            Source::EnvVar(name) => write!(f, "env var ({name})"),
            Source::CliFlag(name) => write!(f, "CLI flag ({name})"),
        }
    }
}

/// Source of each resolved setting, keyed by dotted path (`closure.parallel_threshold`).
#[derive(Debug, Clone, Default)]
pub struct ProvenanceMap {
    entries: BTreeMap<String, Source>,
}

impl ProvenanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, source: Source) {
        self.entries.insert(key.into(), source);
    }

    pub fn get(&self, key: &str) -> Option<&Source> {
        self.entries.get(key)
    }

    /// All entries, sorted by key.
    pub fn sorted_entries(&self) -> impl Iterator<Item = (&str, &Source)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
