use clap::Parser;
use n8r_credentials::CredentialStore;

use crate::{N8rOutput, N8rResult};

#[derive(Debug, Parser)]
/// Remove stored credentials
///
/// Succeeds even when nobody is logged in.
pub struct Logout {}

impl Logout {
    pub fn run(&self, store: &dyn CredentialStore) -> N8rResult<N8rOutput> {
        store.delete()?;
        Ok(N8rOutput::LoggedOut)
    }
}
