use serde::Deserialize;

/// TOML-deserializable config file. All fields are Option for layered merging.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: DefaultsFileConfig,
    #[serde(default)]
    pub closure: ClosureFileConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DefaultsFileConfig {
    pub format: Option<String>,
    /// Edge file read when no input argument is given.
    pub default_input: Option<String>,
    /// Root token used when no root argument is given.
    pub default_root: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClosureFileConfig {
    pub parallel_threshold: Option<usize>,
}

impl FileConfig {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
