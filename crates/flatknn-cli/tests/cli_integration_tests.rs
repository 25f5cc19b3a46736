//! CLI integration tests for the `flatknn` binary, using `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the CLI binary command
fn flatknn_cmd() -> Command {
    Command::cargo_bin("flatknn").unwrap()
}

/// Writes an fvecs file (little-endian i32 dimension + f32 components per
/// record) into `dir` and returns its path.
fn write_fvecs(dir: &Path, name: &str, vectors: &[Vec<f32>]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    for vector in vectors {
        file.write_all(&(vector.len() as i32).to_le_bytes()).unwrap();
        for component in vector {
            file.write_all(&component.to_le_bytes()).unwrap();
        }
    }
    path
}

/// Candidate set on a line: labels 0..4 at coordinates 0, 1, 2, 3, 4.
fn line_base(dir: &Path) -> PathBuf {
    write_fvecs(
        dir,
        "base.fvecs",
        &[
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 0.0],
            vec![4.0, 0.0],
        ],
    )
}

// =============================================================================
// Help & Version Tests
// =============================================================================

#[test]
fn test_help_displays_usage() {
    flatknn_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FlatKnn CLI"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_displays_version() {
    flatknn_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flatknn"));
}

#[test]
fn test_invalid_command_shows_error() {
    flatknn_cmd()
        .arg("invalid_command_xyz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// =============================================================================
// Info Command Tests
// =============================================================================

#[test]
fn test_info_reports_count_and_dimension() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());

    flatknn_cmd()
        .arg("info")
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vectors:   5"))
        .stdout(predicate::str::contains("Dimension: 2"));
}

#[test]
fn test_info_on_missing_file_fails() {
    flatknn_cmd()
        .arg("info")
        .arg("/nonexistent/base.fvecs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

// =============================================================================
// Search Command Tests
// =============================================================================

#[test]
fn test_search_writes_expected_result_file() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    // Query at 2.1: nearest labels are 2, then 3, then 1.
    let queries = write_fvecs(temp_dir.path(), "query.fvecs", &[vec![2.1, 0.0]]);
    let out_dir = temp_dir.path().join("out");

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "3", "--no-progress"])
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Summary"))
        .stdout(predicate::str::contains("binary-heap"));

    let result_file = out_dir.join("knn_binary-heap_3_1.txt");
    let contents = fs::read_to_string(result_file).unwrap();
    assert_eq!(contents, "0: 2, 3, 1\n");
}

#[test]
fn test_search_strategies_produce_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(
        temp_dir.path(),
        "query.fvecs",
        &[vec![0.4, 0.0], vec![3.6, 0.0]],
    );
    let out_dir = temp_dir.path().join("out");

    for strategy in ["sorted-list", "binary-heap", "std-heap"] {
        flatknn_cmd()
            .arg("search")
            .arg(&base)
            .arg(&queries)
            .args(["-k", "2", "--strategy", strategy, "--no-progress"])
            .arg("--output")
            .arg(&out_dir)
            .assert()
            .success();
    }

    let read = |s: &str| fs::read_to_string(out_dir.join(format!("knn_{s}_2_2.txt"))).unwrap();
    let baseline = read("sorted-list");
    assert_eq!(baseline, read("binary-heap"));
    assert_eq!(baseline, read("std-heap"));
    assert_eq!(baseline, "0: 0, 1\n1: 4, 3\n");
}

#[test]
fn test_search_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(
        temp_dir.path(),
        "query.fvecs",
        &[vec![1.2, 0.0], vec![2.8, 0.0]],
    );

    let seq_dir = temp_dir.path().join("seq");
    let par_dir = temp_dir.path().join("par");

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "2", "--no-progress"])
        .arg("--output")
        .arg(&seq_dir)
        .assert()
        .success();

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "2", "--parallel", "--no-progress"])
        .arg("--output")
        .arg(&par_dir)
        .assert()
        .success();

    let seq = fs::read_to_string(seq_dir.join("knn_binary-heap_2_2.txt")).unwrap();
    let par = fs::read_to_string(par_dir.join("knn_binary-heap_2_2.txt")).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_search_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(temp_dir.path(), "query.fvecs", &[vec![0.0, 0.0]]);
    let out_dir = temp_dir.path().join("out");

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "1", "--format", "json", "--no-progress"])
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success();

    let contents = fs::read_to_string(out_dir.join("knn_binary-heap_1_1.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(rows[0]["query"], 0);
    assert_eq!(rows[0]["neighbors"][0]["label"], 0);
}

#[test]
fn test_search_limit_caps_query_count() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(
        temp_dir.path(),
        "query.fvecs",
        &[vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]],
    );
    let out_dir = temp_dir.path().join("out");

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "1", "--limit", "2", "--no-progress"])
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success();

    let contents = fs::read_to_string(out_dir.join("knn_binary-heap_1_2.txt")).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn test_search_dimension_mismatch_fails() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(temp_dir.path(), "query.fvecs", &[vec![1.0, 2.0, 3.0]]);

    flatknn_cmd()
        .arg("search")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "2", "--no-progress"])
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dimension mismatch"));
}

// =============================================================================
// Compare Command Tests
// =============================================================================

#[test]
fn test_compare_reports_agreement() {
    let temp_dir = TempDir::new().unwrap();
    let base = line_base(temp_dir.path());
    let queries = write_fvecs(
        temp_dir.path(),
        "query.fvecs",
        &[vec![0.9, 0.0], vec![3.2, 0.0]],
    );

    flatknn_cmd()
        .arg("compare")
        .arg(&base)
        .arg(&queries)
        .args(["-k", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy Comparison"))
        .stdout(predicate::str::contains("sorted-list"))
        .stdout(predicate::str::contains("binary-heap"))
        .stdout(predicate::str::contains("std-heap"))
        .stdout(predicate::str::contains(
            "All strategies retrieved identical neighbors",
        ));
}
