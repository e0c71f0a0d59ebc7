use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::OAuthError;

/// Grant type sent on every token poll (RFC 8628 §3.4)
pub const DEVICE_CODE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// Client identifier the n8r CLI registers itself under
pub const DEFAULT_CLIENT_ID: &str = "n8r-cli";

/// Interval used when the server does not dictate one (RFC 8628 §3.2)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Amount added to the interval on every `slow_down` (RFC 8628 §3.5)
pub const DEFAULT_SLOW_DOWN_INCREMENT: Duration = Duration::from_secs(5);

const DEVICE_AUTHORIZATION_PATH: &str = "/api/auth/device/code";
const TOKEN_PATH: &str = "/api/auth/device/token";

/// Client configuration for the device flow
#[derive(Debug, Clone)]
pub struct DeviceFlowConfig {
    pub base_url: Url,
    pub client_id: String,
    pub default_interval: Duration,
    pub slow_down_increment: Duration,
}

impl DeviceFlowConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            default_interval: DEFAULT_POLL_INTERVAL,
            slow_down_increment: DEFAULT_SLOW_DOWN_INCREMENT,
        }
    }

    pub fn device_authorization_endpoint(&self) -> Result<Url, OAuthError> {
        Ok(self.base_url.join(DEVICE_AUTHORIZATION_PATH)?)
    }

    pub fn token_endpoint(&self) -> Result<Url, OAuthError> {
        Ok(self.base_url.join(TOKEN_PATH)?)
    }
}

/// Device Authorization Request (RFC 8628 §3.1)
#[derive(Debug, Serialize)]
pub struct DeviceAuthorizationRequest<'a> {
    pub client_id: &'a str,
}

/// Device Authorization Response (RFC 8628 §3.2)
#[derive(Debug, Deserialize)]
pub struct DeviceAuthorizationResponse {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub verification_uri_complete: Option<String>,
    pub expires_in: u64,
    pub interval: Option<u64>,
}

/// Token Request using Device Code (RFC 8628 §3.4)
#[derive(Debug, Serialize)]
pub struct DeviceTokenRequest<'a> {
    pub grant_type: &'a str,
    pub device_code: &'a str,
    pub client_id: &'a str,
}

/// Successful token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Error Response from the token or device authorization endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// What a single poll of the token endpoint produced
#[derive(Debug, Clone)]
pub enum TokenEndpointResponse {
    Token(TokenResponse),
    Error(ErrorResponse),
}

/// A pending device authorization, valid for one login attempt.
///
/// The device code is what gets polled with; only the user code and
/// verification URI are meant to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub verification_uri_complete: Option<String>,
    pub interval: Duration,
    pub expires_in: Duration,
}

impl DeviceAuthorization {
    pub fn from_response(
        response: DeviceAuthorizationResponse,
        default_interval: Duration,
    ) -> Result<Self, OAuthError> {
        for (field, value) in [
            ("device_code", &response.device_code),
            ("user_code", &response.user_code),
            ("verification_uri", &response.verification_uri),
        ] {
            if value.trim().is_empty() {
                return Err(OAuthError::Protocol(format!(
                    "device authorization response has an empty `{field}`"
                )));
            }
        }
        if response.expires_in == 0 {
            return Err(OAuthError::Protocol(
                "device authorization response has a zero `expires_in`".to_string(),
            ));
        }

        Ok(Self {
            device_code: response.device_code,
            user_code: response.user_code,
            verification_uri: response.verification_uri,
            verification_uri_complete: response.verification_uri_complete,
            interval: response
                .interval
                .map(Duration::from_secs)
                .unwrap_or(default_interval),
            expires_in: Duration::from_secs(response.expires_in),
        })
    }
}
