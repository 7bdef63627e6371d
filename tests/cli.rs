//! Integration tests for the headcase CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn headcase() -> Command {
    let mut cmd = Command::cargo_bin("headcase").unwrap();
    cmd.arg("--no-config");
    cmd
}

#[test]
fn test_text_argument() {
    headcase()
        .arg("--text")
        .arg("the quick brown fox jumps over a lazy dog")
        .assert()
        .success()
        .stdout("The Quick Brown Fox Jumps Over a Lazy Dog\n");
}

#[test]
fn test_stdin_lines() {
    headcase()
        .write_stdin("to be or not to be\nsmith v. jones case\n")
        .assert()
        .success()
        .stdout("To Be or Not to Be\nSmith v. Jones Case\n");
}

#[test]
fn test_file_output() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("titles.txt");
    fs::write(&file, "state-of-the-art design\nhello  world\n").unwrap();

    headcase()
        .arg(&file)
        .assert()
        .success()
        .stdout("State-of-the-art Design\nHello  World\n");
}

#[test]
fn test_write_in_place() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("titles.txt");
    fs::write(&file, "a tale of two cities\n").unwrap();

    headcase().arg("--write").arg(&file).assert().success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "A Tale of Two Cities\n");
}

#[test]
fn test_check_fails_on_unconverted_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("titles.txt");
    fs::write(&file, "back to the future\n").unwrap();

    headcase()
        .arg("--check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in headline case"));
}

#[test]
fn test_check_passes_on_converted_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("titles.txt");
    fs::write(&file, "Back to the Future\n").unwrap();

    headcase().arg("--check").arg(&file).assert().success();
}

#[test]
fn test_diff_output() {
    headcase()
        .arg("--diff")
        .write_stdin("lost in translation\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-lost in translation"))
        .stdout(predicate::str::contains("+Lost in Translation"));
}

#[test]
fn test_check_diff_from_stdin() {
    headcase()
        .arg("--check")
        .arg("--diff")
        .write_stdin("lost in translation\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<stdin>: not in headline case"))
        .stdout(predicate::str::contains("-lost in translation"))
        .stdout(predicate::str::contains("+Lost in Translation"));
}

#[test]
fn test_write_requires_files() {
    headcase()
        .arg("--write")
        .write_stdin("a tale of two cities\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_explain_output() {
    headcase()
        .arg("--explain")
        .arg("--text")
        .arg("the end of it")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:3\tof\tof\tforced-lowercase"))
        .stdout(predicate::str::contains("1:4\tit\tIt\tposition"));
}

#[test]
fn test_min_length_override() {
    headcase()
        .arg("--min-length")
        .arg("6")
        .arg("--text")
        .arg("paid from home")
        .assert()
        .success()
        .stdout("Paid From Home\n");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[words]\nextra_lowercase = [\"from\"]\n").unwrap();

    Command::cargo_bin("headcase")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--text")
        .arg("letters from home")
        .assert()
        .success()
        .stdout("Letters from Home\n");
}

#[test]
fn test_discovered_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".headcase.toml"),
        "[words]\nextra_capitalize = [\"ox\"]\n",
    )
    .unwrap();

    Command::cargo_bin("headcase")
        .unwrap()
        .current_dir(dir.path())
        .arg("--text")
        .arg("the ox cart")
        .assert()
        .success()
        .stdout("The Ox Cart\n");
}

#[test]
fn test_invalid_config_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[words]\nextra_capitalize = [\"the\"]\n").unwrap();

    Command::cargo_bin("headcase")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--text")
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("listed in both"));
}

#[test]
fn test_missing_file_reported() {
    headcase()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading does-not-exist.txt"));
}
