use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day14-part2").unwrap();
    cmd.arg("sample.txt").arg("--width").arg("11").arg("--height").arg("7");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 5\n"));
}

#[test]
fn part2_shows_board_on_stderr() {
    let mut cmd = Command::cargo_bin("day14-part2").unwrap();
    cmd.arg("sample.txt")
        .arg("--width")
        .arg("11")
        .arg("--height")
        .arg("7")
        .arg("--show");

    cmd.assert()
        .success()
        .stdout(str::diff("Answer: 5\n"))
        .stderr(str::contains("After 5 second(s):"));
}
