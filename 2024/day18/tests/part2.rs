use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day18-part2").unwrap();
    cmd.arg("sample.txt").arg("--size").arg("7");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 6,1\n"));
}
