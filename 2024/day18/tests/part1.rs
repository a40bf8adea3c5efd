use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day18-part1").unwrap();
    cmd.arg("sample.txt").arg("--size").arg("7").arg("--fallen").arg("12");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 22\n"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("day18-part1").unwrap();
    cmd.arg("no_such_input.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("no_such_input.txt"));
}

#[test]
fn part1_fails_on_unreachable_exit() {
    let mut cmd = Command::cargo_bin("day18-part1").unwrap();
    cmd.arg("sample.txt").arg("--size").arg("7").arg("--fallen").arg("25");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("No path leads from start to exit."));
}
