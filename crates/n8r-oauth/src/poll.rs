//! The token polling loop of the device flow.
//!
//! Each round sleeps for the current interval, gives up locally once the
//! device code's lifetime has elapsed, and otherwise asks the token endpoint
//! once. `authorization_pending` keeps the pace, `slow_down` permanently
//! widens the interval, and every other answer ends the loop.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use n8r_credentials::StoredCredential;
use tokio::time::{sleep, Instant};

use crate::{ErrorResponse, OAuthError, TokenEndpointResponse, TokenResponse};

/// Where a polling session stands after its latest response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Waiting,
    SlowDown,
    Succeeded,
    Denied,
    Expired,
    Failed,
}

impl PollState {
    fn from_error_code(code: &str) -> Self {
        match code {
            "authorization_pending" => PollState::Waiting,
            "slow_down" => PollState::SlowDown,
            "access_denied" => PollState::Denied,
            "expired_token" => PollState::Expired,
            _ => PollState::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, PollState::Waiting | PollState::SlowDown)
    }
}

/// A token endpoint that can be asked whether a device code has been authorized.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenEndpoint {
    /// Issues one token request for `device_code`.
    ///
    /// Transport failures and unparseable responses are errors; OAuth error
    /// codes come back as [`TokenEndpointResponse::Error`].
    async fn request_token(&self, device_code: &str)
        -> Result<TokenEndpointResponse, OAuthError>;
}

/// Polls `endpoint` until the device code is authorized, denied, or expired.
///
/// The deadline is fixed at `now + expires_in` when the call starts and is
/// checked after every sleep, before any request goes out.
pub async fn poll_for_token<E>(
    endpoint: &E,
    device_code: &str,
    interval: Duration,
    expires_in: Duration,
    slow_down_increment: Duration,
) -> Result<StoredCredential, OAuthError>
where
    E: TokenEndpoint + Sync + ?Sized,
{
    let deadline = Instant::now() + expires_in;
    let mut interval = interval;
    let mut state = PollState::Waiting;

    loop {
        sleep(interval).await;

        if Instant::now() >= deadline {
            transition(&mut state, PollState::Expired, interval);
            return Err(OAuthError::ExpiredToken);
        }

        let response = match endpoint.request_token(device_code).await {
            Ok(response) => response,
            Err(error) => {
                transition(&mut state, PollState::Failed, interval);
                return Err(error);
            }
        };

        let error = match response {
            TokenEndpointResponse::Token(token) => {
                return match credential_from_token(token) {
                    Ok(credential) => {
                        transition(&mut state, PollState::Succeeded, interval);
                        Ok(credential)
                    }
                    Err(error) => {
                        transition(&mut state, PollState::Failed, interval);
                        Err(error)
                    }
                };
            }
            TokenEndpointResponse::Error(error) => error,
        };

        transition(&mut state, PollState::from_error_code(&error.error), interval);
        match state {
            PollState::Waiting => {}
            PollState::SlowDown => interval += slow_down_increment,
            PollState::Denied => return Err(OAuthError::AccessDenied),
            PollState::Expired => return Err(OAuthError::ExpiredToken),
            PollState::Succeeded | PollState::Failed => return Err(unexpected_error(error)),
        }
    }
}

fn transition(state: &mut PollState, next: PollState, interval: Duration) {
    tracing::debug!(
        from = ?state,
        to = ?next,
        terminal = next.is_terminal(),
        interval_secs = interval.as_secs(),
        "device flow transition"
    );
    *state = next;
}

fn unexpected_error(error: ErrorResponse) -> OAuthError {
    let detail = match error.error_description {
        Some(description) => format!("{}: {}", error.error, description),
        None => error.error,
    };
    OAuthError::Protocol(format!("token endpoint returned error `{detail}`"))
}

fn credential_from_token(token: TokenResponse) -> Result<StoredCredential, OAuthError> {
    if token.access_token.is_empty() {
        return Err(OAuthError::Protocol(
            "token response has an empty `access_token`".to_string(),
        ));
    }
    if token.token_type.is_empty() {
        return Err(OAuthError::Protocol(
            "token response has an empty `token_type`".to_string(),
        ));
    }
    let expires_in = i64::try_from(token.expires_in)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .ok_or_else(|| {
            OAuthError::Protocol(format!(
                "token response has an out of range `expires_in` of {}",
                token.expires_in
            ))
        })?;

    Ok(StoredCredential::issued_at(
        token.access_token,
        token.token_type,
        expires_in,
        Utc::now(),
    ))
}
