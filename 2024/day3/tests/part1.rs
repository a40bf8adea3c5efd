use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day3-part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 161\n"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("day3-part1").unwrap();
    cmd.arg("no_such_input.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("no_such_input.txt"));
}

#[test]
fn part1_fails_on_overflowing_sum() {
    let mut cmd = Command::cargo_bin("day3-part1").unwrap();
    cmd.arg("large.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("doesn't fit in 64 bits"));
}
