use assert_fs::TempDir;
use n8r::PKG_VERSION;
use predicates::prelude::*;
use rstest::rstest;

use crate::n8r;

#[rstest]
#[case::subcommand("version")]
#[case::long_flag("--version")]
#[case::short_flag("-v")]
fn it_prints_the_version(#[case] arg: &str) {
    let home = TempDir::new().unwrap();

    n8r(&home)
        .arg(arg)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("n8r v{PKG_VERSION}\n")));
}

#[test]
fn it_greets_logged_out_users() {
    let home = TempDir::new().unwrap();

    n8r(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Injectionator CLI v{PKG_VERSION}")))
        .stdout(predicate::str::contains("You are not logged in."));
}

#[test]
fn it_exits_with_one_on_an_unknown_command() {
    let home = TempDir::new().unwrap();

    n8r(&home).arg("deploy").assert().code(1);
}
