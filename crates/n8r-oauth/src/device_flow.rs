use async_trait::async_trait;
use n8r_credentials::StoredCredential;
use reqwest::{header::ACCEPT, Client, StatusCode};
use std::time::Duration;

use crate::{
    error::OAuthError,
    poll::{self, TokenEndpoint},
    types::*,
};

/// OAuth 2.0 Device Authorization Grant client
pub struct DeviceFlowClient {
    client: Client,
    config: DeviceFlowConfig,
}

impl DeviceFlowClient {
    /// Create a new Device Flow client
    pub fn new(config: DeviceFlowConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a Device Flow client that sends requests through `client`
    pub fn with_client(client: Client, config: DeviceFlowConfig) -> Self {
        Self { client, config }
    }

    /// Start the device authorization flow
    pub async fn request_device_code(&self) -> Result<DeviceAuthorization, OAuthError> {
        let endpoint = self.config.device_authorization_endpoint()?;
        tracing::debug!(%endpoint, client_id = %self.config.client_id, "requesting device code");

        let request = DeviceAuthorizationRequest {
            client_id: &self.config.client_id,
        };
        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(OAuthError::Authorization {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let device_response: DeviceAuthorizationResponse = serde_json::from_slice(&body)
            .map_err(|e| {
                OAuthError::Protocol(format!("malformed device authorization response: {e}"))
            })?;
        DeviceAuthorization::from_response(device_response, self.config.default_interval)
    }

    /// Poll for token completion
    pub async fn poll_for_token(
        &self,
        device_code: &str,
        interval: Duration,
        expires_in: Duration,
    ) -> Result<StoredCredential, OAuthError> {
        poll::poll_for_token(
            self,
            device_code,
            interval,
            expires_in,
            self.config.slow_down_increment,
        )
        .await
    }
}

#[async_trait]
impl TokenEndpoint for DeviceFlowClient {
    async fn request_token(
        &self,
        device_code: &str,
    ) -> Result<TokenEndpointResponse, OAuthError> {
        let token_request = DeviceTokenRequest {
            grant_type: DEVICE_CODE_GRANT_TYPE,
            device_code,
            client_id: &self.config.client_id,
        };

        let response = self
            .client
            .post(self.config.token_endpoint()?)
            .header(ACCEPT, "application/json")
            .form(&token_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::trace!(%status, "token endpoint responded");
        parse_token_response(status, &body)
    }
}

/// Some servers answer pending polls with `200 OK` and an error body, so an
/// OAuth error body wins over the status code.
fn parse_token_response(status: StatusCode, body: &[u8]) -> Result<TokenEndpointResponse, OAuthError> {
    if let Ok(error) = serde_json::from_slice::<ErrorResponse>(body) {
        return Ok(TokenEndpointResponse::Error(error));
    }
    if !status.is_success() {
        return Err(OAuthError::Protocol(format!(
            "token endpoint returned HTTP {status} without an OAuth error: {}",
            String::from_utf8_lossy(body)
        )));
    }
    serde_json::from_slice::<TokenResponse>(body)
        .map(TokenEndpointResponse::Token)
        .map_err(|e| OAuthError::Protocol(format!("malformed token response: {e}")))
}

fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error,
            error_description: Some(description),
        }) => format!("{error}: {description}"),
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) if body.is_empty() => "no details provided".to_string(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
