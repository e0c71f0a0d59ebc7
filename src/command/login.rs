use clap::Parser;
use n8r_credentials::CredentialStore;
use n8r_oauth::DeviceFlowClient;
use n8r_std::{warnln, Style};
use thiserror::Error;

use crate::command::output::BANNER;
use crate::utils::browser;
use crate::{N8rOutput, N8rResult};

#[derive(Error, Debug)]
#[error("Login cancelled. No credentials were saved.")]
pub struct LoginCancelled;

#[derive(Debug, Parser)]
/// Authenticate with your Injectionator account
///
/// Prints a short code and a link. Approve the code in a browser where you
/// are signed in to Injectionator, and n8r stores the resulting access token
/// for later commands.
pub struct Login {
    /// Only print the verification link instead of opening a browser
    #[arg(long)]
    no_browser: bool,
}

impl Login {
    pub async fn run(
        &self,
        store: &dyn CredentialStore,
        client: &DeviceFlowClient,
    ) -> N8rResult<N8rOutput> {
        eprint!("{}", Style::Banner.paint(BANNER));
        eprintln!(" Authenticate with Injectionator\n");

        match store.load() {
            Ok(Some(existing)) if !existing.is_expired() => {
                return Ok(N8rOutput::AlreadyAuthenticated);
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable stored credential");
            }
        }

        let authorization = client.request_device_code().await?;

        eprintln!(
            "Visit {} and enter code:\n",
            Style::Link.paint(&authorization.verification_uri)
        );
        eprintln!(
            "  >>> {} <<<\n",
            Style::UserCode.paint(&authorization.user_code)
        );

        if !self.no_browser {
            let url = authorization
                .verification_uri_complete
                .as_deref()
                .unwrap_or(&authorization.verification_uri);
            if let Err(error) = browser::open(url) {
                warnln!("{}", error.message());
            }
        }

        eprintln!("{}", Style::Pending.paint("Waiting for authorization..."));

        let credential = tokio::select! {
            result = client.poll_for_token(
                &authorization.device_code,
                authorization.interval,
                authorization.expires_in,
            ) => result?,
            Ok(()) = tokio::signal::ctrl_c() => {
                return Err(LoginCancelled.into());
            }
        };

        store.save(&credential)?;
        tracing::debug!(token = %credential.masked_token(), "stored new credential");

        Ok(N8rOutput::LoginSuccess)
    }
}
