use clap::Parser;
use n8r_credentials::CredentialStore;

use crate::utils::client::ApiClient;
use crate::utils::session::require_credential;
use crate::{N8rOutput, N8rResult};

#[derive(Debug, Parser)]
/// View your Injectionator profile
pub struct Profile {}

impl Profile {
    pub async fn run(
        &self,
        store: &dyn CredentialStore,
        client: &ApiClient,
    ) -> N8rResult<N8rOutput> {
        let credential = require_credential(store)?;
        let profile = client.get_profile(&credential).await?;
        Ok(N8rOutput::Profile(Box::new(profile)))
    }
}
