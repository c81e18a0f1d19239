use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("find-resistance").unwrap()
}

#[test]
fn best_match_with_custom_resistors() {
    cmd()
        .args(["150", "-r", "100,220", "-m", "2"])
        .assert()
        .success()
        .stdout("110Ω (-40Ω/-26.667%): (220||220)Ω\n\n─┬─[220Ω]─┬─\n └─[220Ω]─┘ \n");
}

#[test]
fn exact_match_from_default_series() {
    cmd()
        .arg("4k7")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("4700Ω (+0Ω/+0%): 4700Ω\n"));
}

#[test]
fn results_are_separated() {
    cmd()
        .args(["150", "--resistors", "100,220", "--max", "2", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=".repeat(40)).count(2));
}

#[test]
fn invalid_target_fails() {
    cmd()
        .args(["4.7kOhm"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "\"4.7kOhm\" is not a valid resistance value string",
        ));
}

#[test]
fn zero_target_fails() {
    cmd()
        .args(["0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target value must be a positive resistance"));
}
