use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn distance_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["distance", "0.0", "0.0", "0.0", "3.0", "4.0", "0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance is 5.000"));
}

#[test]
fn length_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["length", "2.0", "3.0", "6.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length is 7.000"));
}

#[test]
fn dot_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["dot", "1.0", "0.0", "0.0", "0.0", "1.0", "0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dot product is 0.000"));
}

#[test]
fn unit_command_rejects_zero_vector() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["unit", "0.0", "0.0", "0.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot normalize the zero vector"));
}

#[test]
fn unit_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["unit", "0.0", "0.0", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.000000,0.000000,1.000000"));
}

#[test]
fn angle_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["angle", "1.0", "0.0", "0.0", "0.0", "5.0", "0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Angle is 1.571 rad"));
}

#[test]
fn floor_command() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["floor", "1.7", "2.3", "64.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Block 1,2,64"));
}

#[test]
fn path_length_command() {
    let file = assert_fs::NamedTempFile::new("path.csv").unwrap();
    file.write_str("0.0,0.0,0.0\n3.0,4.0,0.0\n6.0,8.0,0.0\n")
        .unwrap();

    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["path-length", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 10.000"));
}

#[test]
fn path_length_reports_read_errors() {
    Command::cargo_bin("voxel_math_cli")
        .unwrap()
        .args(["path-length", "no-such-file.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading no-such-file.csv"));
}
