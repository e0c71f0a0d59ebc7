mod code;
mod suggestion;

pub use code::N8rErrorCode;
pub use suggestion::N8rErrorSuggestion;

use n8r_credentials::StorageError;
use n8r_oauth::OAuthError;

use crate::command::login::LoginCancelled;
use crate::utils::client::ApiClientError;
use crate::utils::session::SessionError;

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Debug)]
pub struct N8rErrorMetadata {
    pub suggestion: Option<N8rErrorSuggestion>,
    pub code: Option<N8rErrorCode>,
    pub skip_printing_cause: bool,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for N8rErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(storage_error) = error.downcast_ref::<StorageError>() {
            let (suggestion, code) = match storage_error {
                StorageError::DefaultConfigDirNotFound => {
                    (Some(N8rErrorSuggestion::SetConfigHome), Some(N8rErrorCode::E001))
                }
                StorageError::MalformedCredential { .. } => (
                    Some(N8rErrorSuggestion::LogoutAndLogin),
                    Some(N8rErrorCode::E002),
                ),
                StorageError::IoError(_) | StorageError::N8rStdError(_) => {
                    (Some(N8rErrorSuggestion::SetConfigHome), Some(N8rErrorCode::E003))
                }
                StorageError::PathNotUtf8(_) | StorageError::TomlSerialization(_) => {
                    (Some(N8rErrorSuggestion::SubmitIssue), Some(N8rErrorCode::E003))
                }
            };
            return N8rErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: false,
            };
        }

        if let Some(oauth_error) = error.downcast_ref::<OAuthError>() {
            let (suggestion, code) = match oauth_error {
                OAuthError::Transport(_) => (
                    Some(N8rErrorSuggestion::CheckServerConnection),
                    Some(N8rErrorCode::E004),
                ),
                OAuthError::Authorization { .. } => {
                    (Some(N8rErrorSuggestion::SubmitIssue), Some(N8rErrorCode::E005))
                }
                OAuthError::Protocol(_) => {
                    (Some(N8rErrorSuggestion::SubmitIssue), Some(N8rErrorCode::E006))
                }
                OAuthError::AccessDenied => {
                    (Some(N8rErrorSuggestion::RequestAccess), Some(N8rErrorCode::E007))
                }
                OAuthError::ExpiredToken => {
                    (Some(N8rErrorSuggestion::RestartLogin), Some(N8rErrorCode::E008))
                }
                OAuthError::InvalidUrl(_) => {
                    (Some(N8rErrorSuggestion::SetBaseUrl), Some(N8rErrorCode::E009))
                }
            };
            return N8rErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: true,
            };
        }

        if let Some(client_error) = error.downcast_ref::<ApiClientError>() {
            let (suggestion, code) = match client_error {
                ApiClientError::SessionExpired => {
                    (Some(N8rErrorSuggestion::RerunLogin), Some(N8rErrorCode::E011))
                }
                ApiClientError::Http { .. } => (
                    Some(N8rErrorSuggestion::CheckServerConnection),
                    Some(N8rErrorCode::E012),
                ),
                ApiClientError::Transport(_) => (
                    Some(N8rErrorSuggestion::CheckServerConnection),
                    Some(N8rErrorCode::E004),
                ),
                ApiClientError::InvalidJson(_) => {
                    (Some(N8rErrorSuggestion::SubmitIssue), Some(N8rErrorCode::E006))
                }
                ApiClientError::InvalidUrl(_) => {
                    (Some(N8rErrorSuggestion::SetBaseUrl), Some(N8rErrorCode::E009))
                }
            };
            return N8rErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: true,
            };
        }

        if let Some(session_error) = error.downcast_ref::<SessionError>() {
            let (suggestion, code) = match session_error {
                SessionError::NotLoggedIn => {
                    (Some(N8rErrorSuggestion::RunLogin), Some(N8rErrorCode::E010))
                }
                SessionError::Expired { .. } => {
                    (Some(N8rErrorSuggestion::RerunLogin), Some(N8rErrorCode::E011))
                }
            };
            return N8rErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: true,
            };
        }

        if error.downcast_ref::<LoginCancelled>().is_some() {
            return N8rErrorMetadata {
                suggestion: None,
                code: Some(N8rErrorCode::E013),
                skip_printing_cause: true,
            };
        }

        if error.downcast_ref::<url::ParseError>().is_some() {
            return N8rErrorMetadata {
                suggestion: Some(N8rErrorSuggestion::SetBaseUrl),
                code: Some(N8rErrorCode::E009),
                skip_printing_cause: false,
            };
        }

        N8rErrorMetadata::default()
    }
}
