pub mod edges;

use crate::errors::Result;
use std::path::Path;

/// Read `arg` as a file when it names one, otherwise treat it as literal edge text.
pub fn load_input(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        tracing::debug!("Reading edges from {}", path.display());
        Ok(std::fs::read_to_string(path)?)
    } else {
        tracing::debug!("Treating argument as literal edge text");
        Ok(arg.to_string())
    }
}
