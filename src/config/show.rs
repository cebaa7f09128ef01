use crate::config::ResolvedConfig;
use std::io::Write;

/// Render `config show` output.
pub fn render_show<W: Write>(w: &mut W, config: &ResolvedConfig) -> std::io::Result<()> {
    if config.loaded_files.is_empty() {
        writeln!(w, "Loaded config files: (none)")?;
    } else {
        writeln!(w, "Loaded config files:")?;
        for (i, path) in config.loaded_files.iter().enumerate() {
            writeln!(w, "  {}. {}", i + 1, path.display())?;
        }
    }
    writeln!(w)?;

    writeln!(w, "Resolved settings:")?;
    for (key, source) in config.provenance.sorted_entries() {
        writeln!(w, "  {}: {} <- {}", key, value_for_key(config, key), source)?;
    }

    Ok(())
}

fn value_for_key(config: &ResolvedConfig, key: &str) -> String {
    match key {
        "defaults.format" => config.format.clone(),
        "defaults.default_input" => config.default_input.display().to_string(),
        "defaults.default_root" => config.default_root.clone(),
        "closure.parallel_threshold" => config.parallel_threshold.to_string(),
        _ => "(unknown)".to_string(),
    }
}
