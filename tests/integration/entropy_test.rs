use crate::{fixture_path, relmat};
use predicates::prelude::*;

#[test]
fn entropy_two_siblings() {
    relmat()
        .args(["entropy", "1,2\\n1,3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counts per relation:"))
        .stdout(predicate::str::contains("  r1: 2 (0.333333)"))
        .stdout(predicate::str::contains("  r4: 0 (0.000000)"))
        .stdout(predicate::str::contains("  r5: 2 (0.333333)"))
        .stdout(predicate::str::contains("Entropy (bits): 1.584963"))
        .stdout(predicate::str::contains("Normalized entropy: 0.682606"));
}

#[test]
fn entropy_no_edges_is_zero() {
    relmat()
        .args(["entropy", "", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy (bits): 0.000000"))
        .stdout(predicate::str::contains("Normalized entropy: 0.000000"));
}

#[test]
fn entropy_duplicates_ignored() {
    // Same hierarchy as 1->2, 1->3, 2->4 without the repeated edge
    relmat()
        .args(["entropy", fixture_path("duplicates.csv").to_str().unwrap(), "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  r1: 3 "))
        .stdout(predicate::str::contains("  r3: 1 "))
        .stdout(predicate::str::contains("  r5: 2 "));
}

#[test]
fn entropy_json() {
    relmat()
        .args(["entropy", "1,2\\n2,3", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 6"))
        .stdout(predicate::str::contains("\"normalized_entropy\""));
}

#[test]
fn entropy_csv() {
    relmat()
        .args(["entropy", "1,2\\n2,3", "1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relation,count,probability\n"))
        .stdout(predicate::str::contains("r3,1,0.166667"));
}

#[test]
fn entropy_dot_falls_back_to_text() {
    relmat()
        .args(["entropy", "1,2", "1", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy (bits):"));
}

#[test]
fn entropy_default_input_fallback() {
    relmat()
        .arg("entropy")
        .assert()
        .success()
        .stdout(predicate::str::contains("  r1: 7 "))
        .stdout(predicate::str::contains("  r3: 5 "))
        .stdout(predicate::str::contains("  r5: 10 "));
}

#[test]
fn entropy_env_format() {
    relmat()
        .env("RELMAT_FORMAT", "json")
        .args(["entropy", "1,2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"entropy_bits\""));
}

#[test]
fn entropy_parallel_closure_same_result() {
    relmat()
        .args(["entropy", "1,2\\n2,3\\n3,4", "1", "--parallel-threshold", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  r3: 3 "));
}
