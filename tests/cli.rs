extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn writes_both_images() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t", "3", "-l", "15", "-o"])
        .arg(dir.path())
        .arg("3")
        .assert()
        .success();

    let attractors = fs::read_to_string(dir.path().join("newton_attractors_x3.ppm")).unwrap();
    let convergence = fs::read_to_string(dir.path().join("newton_convergence_x3.ppm")).unwrap();
    assert!(attractors.starts_with("P3"));
    assert!(convergence.starts_with("P2"));
    // Header, then one sample per channel per pixel.
    let colors = attractors.split_whitespace().count();
    assert_eq!(colors, 4 + 15 * 15 * 3);
    let greys: Vec<&str> = convergence.split_whitespace().collect();
    assert_eq!(&greys[..4], &["P2", "15", "15", "50"]);
    assert_eq!(greys.len(), 4 + 15 * 15);
}

#[test]
fn creates_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("renders").join("quadratic");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t", "1", "-l", "11", "-o"])
        .arg(&nested)
        .arg("2")
        .assert()
        .success();
    assert!(nested.join("newton_attractors_x2.ppm").exists());
    assert!(nested.join("newton_convergence_x2.ppm").exists());
}

#[test]
fn refuses_degree_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-l", "8", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 9"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn refuses_zero_threads() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t", "0", "-l", "8", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be at least 1"));
}

#[test]
fn refuses_a_missing_degree() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-l", "8"])
        .assert()
        .failure();
}

#[test]
fn refuses_a_garbled_size() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-l", "big", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse picture size"));
}

#[test]
fn refuses_a_size_too_large_to_allocate() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-l", "99999999999", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Picture size is too large"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
