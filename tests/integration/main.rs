mod config_test;
mod entropy_test;
mod matrices_test;

use assert_cmd::Command;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// `relmat` run from the crate root with no RELMAT_* overrides leaking in.
pub fn relmat() -> Command {
    let mut cmd = Command::cargo_bin("relmat").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    for var in [
        "RELMAT_FORMAT",
        "RELMAT_DEFAULT_INPUT",
        "RELMAT_DEFAULT_ROOT",
        "RELMAT_PARALLEL_THRESHOLD",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
