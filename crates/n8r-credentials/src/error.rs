use std::io;

use n8r_std::N8rStdError;
use thiserror::Error;

/// StorageError is the type of Error that occurred while reading or
/// writing the local credential.
#[derive(Error, Debug)]
pub enum StorageError {
    /// DefaultConfigDirNotFound occurs when the default OS config can't be found.
    #[error("Could not determine default OS configuration directory.")]
    DefaultConfigDirNotFound,

    /// MalformedCredential occurs when a credential file exists but can't be parsed.
    #[error("The credential file at '{path}' is malformed.")]
    MalformedCredential {
        /// Location of the unreadable file
        path: String,
        /// What the parser objected to
        #[source]
        source: toml::de::Error,
    },

    /// PathNotUtf8 occurs when a file path is not valid UTF-8
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),

    /// TomlSerialization occurs when a credential can't be serialized to a String.
    #[error(transparent)]
    TomlSerialization(#[from] toml::ser::Error),

    /// io::Error occurs when any given std::io::Error arises.
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// N8rStdError comes from filesystem helpers
    #[error(transparent)]
    N8rStdError(#[from] N8rStdError),
}
