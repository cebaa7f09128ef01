use crate::relmat;
use predicates::prelude::*;

#[test]
fn config_show_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    relmat()
        .args(["config", "show", "--path", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved settings:"))
        .stdout(predicate::str::contains("defaults.format: text <- default"))
        .stdout(predicate::str::contains("defaults.default_root: 1 <- default"))
        .stdout(predicate::str::contains(
            "closure.parallel_threshold: 256 <- default",
        ));
}

#[test]
fn config_show_with_project_config() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".relmat.toml"),
        r#"
[defaults]
format = "json"

[closure]
parallel_threshold = 16
"#,
    )
    .unwrap();

    relmat()
        .args(["config", "show", "--path", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(".relmat.toml"))
        .stdout(predicate::str::contains(
            "defaults.format: json <- project config",
        ))
        .stdout(predicate::str::contains(
            "closure.parallel_threshold: 16 <- project config",
        ));
}

#[test]
fn project_config_drives_format() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".relmat.toml"), "[defaults]\nformat = \"csv\"\n").unwrap();

    relmat()
        .current_dir(tmp.path())
        .args(["entropy", "1,2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relation,count,probability"));
}

#[test]
fn project_config_default_input_and_root() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("org.csv"), "10,20\n10,30\n").unwrap();
    std::fs::write(
        tmp.path().join(".relmat.toml"),
        "[defaults]\ndefault_input = \"org.csv\"\ndefault_root = \"10\"\n",
    )
    .unwrap();

    relmat()
        .current_dir(tmp.path())
        .arg("matrices")
        .assert()
        .success()
        .stdout(predicate::str::contains(" \t10\t20\t30\n"));
}

#[test]
fn invalid_format_in_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".relmat.toml"), "[defaults]\nformat = \"xml\"\n").unwrap();

    relmat()
        .current_dir(tmp.path())
        .args(["entropy", "1,2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'xml'"));
}

#[test]
fn config_show_bad_path() {
    relmat()
        .args(["config", "show", "--path", "/nonexistent/dir"])
        .assert()
        .failure();
}
