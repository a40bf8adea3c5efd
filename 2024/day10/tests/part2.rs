use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10-part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 81\n"));
}
