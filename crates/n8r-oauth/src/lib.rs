//! OAuth 2.0 Device Authorization Grant (RFC 8628) client for the n8r CLI.
//!
//! [`DeviceFlowClient`] performs the two HTTP interactions of the grant:
//! requesting a device code and polling the token endpoint. The polling
//! state machine itself lives in [`poll`] and runs against any
//! [`TokenEndpoint`], so its pacing can be exercised without a server.

pub mod device_flow;
pub mod error;
pub mod poll;
pub mod types;

pub use device_flow::DeviceFlowClient;
pub use error::OAuthError;
pub use poll::{poll_for_token, PollState, TokenEndpoint};
pub use types::*;
