use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day17-part2").unwrap();
    cmd.arg("quine.txt");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 117440\n"));
}

#[test]
fn part2_fails_without_self_output_value() {
    let mut cmd = Command::cargo_bin("day17-part2").unwrap();
    cmd.arg("no_quine.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("No value of register A"));
}
