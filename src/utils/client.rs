use n8r_credentials::StoredCredential;
use n8r_oauth::{DeviceFlowClient, DeviceFlowConfig};
use reqwest::header::{ACCEPT, ORIGIN};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use crate::PKG_VERSION;

const PROFILE_PATH: &str = "/api/auth/profile";

/// Where n8r sends its requests, and the HTTP client it sends them with.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    client: Client,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Result<ClientConfig, reqwest::Error> {
        let version = if cfg!(debug_assertions) {
            format!("{} (dev)", PKG_VERSION)
        } else {
            PKG_VERSION.to_string()
        };
        let client = Client::builder()
            .user_agent(format!("n8r/{version}"))
            .build()?;

        Ok(ClientConfig { base_url, client })
    }

    pub fn get_device_flow_client(&self) -> DeviceFlowClient {
        DeviceFlowClient::with_client(
            self.client.clone(),
            DeviceFlowConfig::new(self.base_url.clone()),
        )
    }

    pub fn get_api_client(&self) -> ApiClient {
        ApiClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Session expired. The server no longer accepts your access token.")]
    SessionExpired,

    #[error("Request failed (HTTP {status}): {body}")]
    Http { status: u16, body: String },

    #[error("Could not reach the Injectionator server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not parse the server's response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Authenticated calls against the Injectionator API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Fetches the profile of the user `credential` was issued to.
    ///
    /// A `401` means the server has dropped the session, whatever the local
    /// expiry says.
    pub async fn get_profile(
        &self,
        credential: &StoredCredential,
    ) -> Result<ProfileResponse, ApiClientError> {
        let endpoint = self.base_url.join(PROFILE_PATH)?;
        tracing::debug!(%endpoint, "fetching profile");

        let response = self
            .client
            .get(endpoint)
            .bearer_auth(&credential.access_token)
            .header(ORIGIN, self.base_url.origin().ascii_serialization())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, "profile endpoint responded");

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiClientError::SessionExpired),
            StatusCode::OK => Ok(serde_json::from_str(&body)?),
            status => Err(ApiClientError::Http {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub user: ProfileUser,
    #[serde(deserialize_with = "null_as_default")]
    pub cohorts: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub points: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub alpha_access: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
    #[serde(deserialize_with = "null_as_default")]
    pub missions: Missions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUser {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mission: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Missions {
    #[serde(deserialize_with = "null_as_default")]
    pub completed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
