use assert_fs::TempDir;
use chrono::Duration;
use n8r_credentials::CredentialStore;
use predicates::prelude::*;

use crate::{n8r, save_credential, store};

#[test]
fn it_reports_not_authenticated_with_an_empty_config_home() {
    let home = TempDir::new().unwrap();

    n8r(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated."));
}

#[test]
fn it_reports_an_authenticated_session() {
    let home = TempDir::new().unwrap();
    save_credential(&home, Duration::hours(1));

    n8r(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Authenticated"))
        .stdout(predicate::str::contains("Token type: Bearer"))
        .stdout(predicate::str::contains("integration-access-token").not());
}

#[test]
fn it_reports_an_expired_session() {
    let home = TempDir::new().unwrap();
    save_credential(&home, Duration::hours(-1));

    n8r(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Token expired"));
}

#[test]
fn it_fails_on_a_corrupt_credential_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(store(&home).path(), "not = [valid").unwrap();

    n8r(&home)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("E002"));
}

#[test]
fn it_logs_out_twice() {
    let home = TempDir::new().unwrap();
    save_credential(&home, Duration::hours(1));

    for _ in 0..2 {
        n8r(&home)
            .arg("logout")
            .assert()
            .success()
            .stdout(predicate::str::contains("Logged out. Credentials removed."));
    }
    assert!(store(&home).load().unwrap().is_none());
}

#[test]
fn it_does_not_log_in_twice() {
    let home = TempDir::new().unwrap();
    save_credential(&home, Duration::hours(1));

    n8r(&home)
        .args(["login", "--no-browser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are already authenticated."));
}

#[test]
fn it_fails_to_log_in_when_the_server_is_unreachable() {
    let home = TempDir::new().unwrap();

    n8r(&home)
        .args(["login", "--no-browser"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("E004"));
    assert!(store(&home).load().unwrap().is_none());
}
