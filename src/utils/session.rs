use chrono::SecondsFormat;
use n8r_credentials::{CredentialStore, StoredCredential};
use thiserror::Error;

use crate::N8rResult;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("You must be logged in to use this command.")]
    NotLoggedIn,

    #[error("Your session expired at {expires_at}.")]
    Expired { expires_at: String },
}

/// Loads the stored credential, failing unless it exists and is still valid.
///
/// An unreadable credential file is reported as a storage error rather than
/// folded into "not logged in".
pub fn require_credential(store: &dyn CredentialStore) -> N8rResult<StoredCredential> {
    match store.load()? {
        None => Err(SessionError::NotLoggedIn.into()),
        Some(credential) if credential.is_expired() => Err(SessionError::Expired {
            expires_at: credential
                .expires_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
        .into()),
        Some(credential) => Ok(credential),
    }
}
