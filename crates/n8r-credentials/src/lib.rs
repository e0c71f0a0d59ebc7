#![cfg_attr(
    not(test),
    deny(
        clippy::panic,
    )
)]

#![deny(missing_docs)]

//! Local storage for the credential issued to the n8r CLI.
//!
//! A single installation holds at most one [`StoredCredential`]. It lives in
//! `credentials.toml` inside the n8r configuration directory, which is
//! resolved by [`Config`]. Commands go through the [`CredentialStore`] trait
//! so they can be exercised against test doubles.

mod config;
mod credential;
mod error;
mod store;

pub use config::Config;
pub use credential::StoredCredential;
pub use error::StorageError;
pub use store::{CredentialStore, FileStore, CREDENTIALS_FILE_NAME};

#[cfg(any(test, feature = "test"))]
pub use store::MockCredentialStore;
