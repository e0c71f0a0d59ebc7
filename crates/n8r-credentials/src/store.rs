use camino::Utf8PathBuf;
use n8r_std::{Fs, N8rStdError};

use crate::{Config, StorageError, StoredCredential};

/// Name of the file holding the credential inside the config home.
pub const CREDENTIALS_FILE_NAME: &str = "credentials.toml";

/// Durable storage for the single credential of this installation.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait CredentialStore {
    /// Reads the stored credential. `Ok(None)` means nobody is logged in;
    /// an error means a record exists but could not be read.
    fn load(&self) -> Result<Option<StoredCredential>, StorageError>;

    /// Replaces the stored credential with `credential`.
    fn save(&self, credential: &StoredCredential) -> Result<(), StorageError>;

    /// Removes the stored credential. Removing an absent credential succeeds.
    fn delete(&self) -> Result<(), StorageError>;
}

/// A [`CredentialStore`] backed by `credentials.toml` in the config home.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Utf8PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the config home described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.home.join(CREDENTIALS_FILE_NAME),
        }
    }

    /// Location of the credential file.
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Option<StoredCredential>, StorageError> {
        let contents = match Fs::read_file_if_exists(&self.path) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Ok(None),
            Err(N8rStdError::EmptyFile { .. }) => String::new(),
            Err(e) => return Err(e.into()),
        };
        let credential =
            toml::from_str(&contents).map_err(|source| StorageError::MalformedCredential {
                path: self.path.to_string(),
                source,
            })?;
        tracing::debug!(path = %self.path, "loaded credential");
        Ok(Some(credential))
    }

    fn save(&self, credential: &StoredCredential) -> Result<(), StorageError> {
        let data = toml::to_string(credential)?;
        Fs::write_file_private(&self.path, data)?;
        tracing::debug!(path = %self.path, expires_at = %credential.expires_at, "saved credential");
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        let removed = Fs::remove_file_if_exists(&self.path)?;
        tracing::debug!(path = %self.path, removed, "deleted credential");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assert_fs::TempDir;
    use camino::Utf8PathBuf;
    use chrono::{Duration, TimeZone, Utc};
    use speculoos::prelude::*;

    use super::*;

    fn store_in(dir: &TempDir) -> FileStore {
        let home = Utf8PathBuf::try_from(dir.path().join("n8r")).unwrap();
        FileStore::new(&Config::new(Some(&home)).unwrap())
    }

    fn credential(token: &str) -> StoredCredential {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 15).unwrap()
            + Duration::nanoseconds(123_456_789);
        StoredCredential::issued_at(token, "Bearer", Duration::seconds(86_400), now)
    }

    #[test]
    fn it_reports_no_credential_before_first_login() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_that!(store.load().unwrap()).is_none();
    }

    #[test]
    fn it_loads_exactly_what_it_saved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let saved = credential("first-token");

        store.save(&saved).unwrap();

        assert_that!(store.load().unwrap()).is_some().is_equal_to(saved);
    }

    #[test]
    fn it_overwrites_the_previous_credential() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&credential("first-token")).unwrap();
        store.save(&credential("second-token")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_that!(loaded.access_token).is_equal_to("second-token".to_string());
    }

    #[test]
    fn it_deletes_idempotently() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&credential("token")).unwrap();

        assert_that!(store.delete()).is_ok();
        assert_that!(store.delete()).is_ok();
        assert_that!(store.load().unwrap()).is_none();
    }

    #[test]
    fn it_deletes_when_nothing_was_ever_saved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_that!(store.delete()).is_ok();
        assert_that!(store.delete()).is_ok();
    }

    #[test]
    fn it_rejects_a_malformed_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "access_token = 42\n").unwrap();

        let result = store.load();

        assert!(matches!(
            result,
            Err(StorageError::MalformedCredential { .. })
        ));
    }

    #[test]
    fn it_rejects_an_empty_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "").unwrap();

        assert!(matches!(
            store.load(),
            Err(StorageError::MalformedCredential { .. })
        ));
    }

    #[test]
    fn it_ignores_fields_it_does_not_know() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let saved = credential("token");
        let mut data = toml::to_string(&saved).unwrap();
        data.push_str("refresh_hint = \"later\"\n");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), data).unwrap();

        assert_that!(store.load().unwrap()).is_some().is_equal_to(saved);
    }
}
