use thiserror::Error;

#[derive(Error, Debug)]
pub enum OAuthError {
    /// The request never produced an HTTP response, or its body could not be read.
    #[error("Could not reach the authorization server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device authorization endpoint refused to issue a device code.
    #[error("The authorization server rejected the login request (HTTP {status}): {detail}")]
    Authorization { status: u16, detail: String },

    /// A response arrived but did not have the shape the grant requires.
    #[error("Unexpected response from the authorization server: {0}")]
    Protocol(String),

    /// The user declined the authorization request.
    #[error("Authorization was denied.")]
    AccessDenied,

    /// The device code lapsed before the user finished authorizing.
    #[error("The device code expired before authorization completed.")]
    ExpiredToken,

    /// The configured base URL could not be joined with an endpoint path.
    #[error("Invalid authorization server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
