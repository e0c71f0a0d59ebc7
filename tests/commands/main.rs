mod auth;
mod profile;
mod version;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::TempDir;
use camino::Utf8PathBuf;
use chrono::{Duration, Utc};
use n8r::utils::env::N8rEnvKey;
use n8r_credentials::{Config, CredentialStore, FileStore, StoredCredential};

/// An `n8r` command isolated in its own config home.
pub(crate) fn n8r(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("n8r");
    cmd.env(N8rEnvKey::ConfigHome.to_string(), home.path())
        .env(N8rEnvKey::BaseUrl.to_string(), "http://127.0.0.1:1")
        .env("NO_COLOR", "1")
        .env_remove("N8R_LOG")
        .env_remove("BROWSER");
    cmd
}

pub(crate) fn store(home: &TempDir) -> FileStore {
    let home = Utf8PathBuf::try_from(home.path().to_path_buf()).unwrap();
    FileStore::new(&Config::new(Some(&home)).unwrap())
}

pub(crate) fn save_credential(home: &TempDir, lifetime: Duration) -> StoredCredential {
    let credential = StoredCredential::issued_at(
        "integration-access-token".to_string(),
        "Bearer".to_string(),
        lifetime,
        Utc::now(),
    );
    store(home).save(&credential).unwrap();
    credential
}
