use assert_cmd::cargo::cargo_bin_cmd;

mod common;
use common::fixture;

#[test]
fn controls_found_exits_0() {
    let path = fixture("isolates.txt");

    let mut cmd = cargo_bin_cmd!("textfacts");
    cmd.args(["has-controls", "--file", path.to_str().unwrap()]);

    cmd.assert().success().code(0).stdout("true\n");
}

#[test]
fn no_controls_exits_2() {
    let path = fixture("plain.txt");

    let mut cmd = cargo_bin_cmd!("textfacts");
    cmd.args(["has-controls", "--file", path.to_str().unwrap()]);

    cmd.assert().failure().code(2).stdout("false\n");
}

#[test]
fn marks_count_as_controls() {
    let mut cmd = cargo_bin_cmd!("textfacts");
    cmd.args(["has-controls", "price\u{200F}"]);
    cmd.assert().success().stdout("true\n");
}
