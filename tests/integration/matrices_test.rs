use crate::{fixture_path, relmat};
use predicates::prelude::*;

#[test]
fn matrices_literal_text() {
    relmat()
        .args(["matrices", "1,2\\n1,3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r1 - direct management"))
        .stdout(predicate::str::contains(" \t1\t2\t3\n1\t0\t1\t1\n"))
        .stdout(predicate::str::contains(
            "r5 - co-subordination (shared parent)\n \t1\t2\t3\n1\t0\t0\t0\n2\t0\t0\t1\n3\t0\t1\t0\n",
        ));
}

#[test]
fn matrices_literal_text_with_negative_ids() {
    relmat()
        .args(["matrices", "-1,2\\n-1,3", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "r1 - direct management\n \t-1\t2\t3\n-1\t0\t1\t1\n2\t0\t0\t0\n3\t0\t0\t0\n",
        ));
}

#[test]
fn matrices_chain_has_indirect_cell() {
    relmat()
        .args(["matrices", "1,2\\n2,3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "r3 - indirect management\n \t1\t2\t3\n1\t0\t0\t1\n2\t0\t0\t0\n3\t0\t0\t0\n",
        ))
        .stdout(predicate::str::contains(
            "r4 - indirect subordination\n \t1\t2\t3\n1\t0\t0\t0\n2\t0\t0\t0\n3\t1\t0\t0\n",
        ));
}

#[test]
fn matrices_from_file_csv() {
    relmat()
        .args([
            "matrices",
            fixture_path("duplicates.csv").to_str().unwrap(),
            "1",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(",1,2,3,4\n1,0,1,1,0\n"));
}

#[test]
fn matrices_json() {
    relmat()
        .args(["matrices", "1,2", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vertices\""))
        .stdout(predicate::str::contains("\"direct_management\""));
}

#[test]
fn matrices_dot_includes_isolated_root() {
    relmat()
        .args(["matrices", "2,3", "9", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph hierarchy"))
        .stdout(predicate::str::contains("\"9\";"))
        .stdout(predicate::str::contains("\"2\" -> \"3\";"));
}

#[test]
fn matrices_default_input_fallback() {
    relmat()
        .arg("matrices")
        .assert()
        .success()
        .stdout(predicate::str::contains(" \t1\t2\t3\t4\t5\t6\t7\t8\n"));
}

#[test]
fn malformed_line_fails_with_usage() {
    relmat()
        .args(["matrices", "1,2,3", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edge line 1: '1,2,3'"))
        .stderr(predicate::str::contains("usage: relmat"));
}

#[test]
fn malformed_file_reports_line_number() {
    relmat()
        .args(["matrices", fixture_path("malformed.csv").to_str().unwrap(), "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edge line 2"));
}

#[test]
fn non_integer_root_fails() {
    relmat()
        .args(["matrices", "1,2", "root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root id is not an integer"));
}

#[test]
fn missing_default_input_fails() {
    let tmp = tempfile::tempdir().unwrap();
    relmat()
        .current_dir(tmp.path())
        .arg("matrices")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Default input file not found"));
}
