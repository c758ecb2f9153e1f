use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn prints_the_result_on_success() {
    Command::cargo_bin("mathex").unwrap()
                                .arg("2 + 3 * (4 - 1)")
                                .assert()
                                .success()
                                .stdout("11\n");
}

#[test]
fn real_results_keep_their_decimal_point() {
    Command::cargo_bin("mathex").unwrap()
                                .arg("7 / 2")
                                .assert()
                                .success()
                                .stdout("3.5\n");

    Command::cargo_bin("mathex").unwrap()
                                .arg("4 / 2")
                                .assert()
                                .success()
                                .stdout("2.0\n");
}

#[test]
fn evaluation_errors_exit_nonzero() {
    Command::cargo_bin("mathex").unwrap()
                                .arg("1 / 0")
                                .assert()
                                .failure()
                                .stderr(contains("Division by zero"));
}

#[test]
fn parse_errors_carry_the_offset() {
    Command::cargo_bin("mathex").unwrap()
                                .arg("2 + $")
                                .assert()
                                .failure()
                                .stderr(contains("offset 4"));
}
