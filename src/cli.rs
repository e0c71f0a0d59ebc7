use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use n8r_credentials::{Config, CredentialStore, FileStore};
use timber::Level;
use url::Url;

use crate::command::{self, N8rOutput};
use crate::utils::{
    client::ClientConfig,
    env::{N8rEnv, N8rEnvKey},
    DEFAULT_BASE_URL,
};
use crate::N8rResult;

#[derive(Debug, Parser)]
#[command(
    name = "n8r",
    disable_version_flag = true,
    about = "
n8r - the Injectionator command line

To authenticate with your Injectionator account, run:

    $ n8r login

You will be shown a short code to approve in your browser.

Once you are logged in:

    - n8r status: Show whether you are logged in and when your session expires
    - n8r profile: View your Injectionator profile
    - n8r logout: Remove stored credentials
"
)]
pub struct N8r {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Specify n8r's log level
    #[arg(long = "log", short = 'l', global = true)]
    pub log_level: Option<Level>,

    /// Print version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    #[arg(skip)]
    pub env_store: N8rEnv,
}

impl N8r {
    pub(crate) fn get_config(&self) -> N8rResult<Config> {
        let override_home: Option<Utf8PathBuf> = self
            .env_store
            .get(N8rEnvKey::ConfigHome)?
            .map(|p| Utf8PathBuf::from(&p));
        Ok(Config::new(override_home.as_ref())?)
    }

    pub(crate) fn get_store(&self) -> N8rResult<FileStore> {
        let store = FileStore::new(&self.get_config()?);
        tracing::debug!(path = %store.path(), "using credential store");
        Ok(store)
    }

    pub(crate) fn get_base_url(&self) -> N8rResult<Url> {
        let base_url = self
            .env_store
            .get(N8rEnvKey::BaseUrl)?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Url::parse(&base_url)?)
    }

    pub(crate) fn get_client_config(&self) -> N8rResult<ClientConfig> {
        Ok(ClientConfig::new(self.get_base_url()?)?)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate with Injectionator
    Login(command::Login),

    /// Remove stored credentials
    Logout(command::Logout),

    /// Show authentication status
    Status(command::Status),

    /// View your Injectionator profile
    Profile(command::Profile),

    /// Print version
    Version,
}

impl N8r {
    pub async fn run(&self) -> N8rResult<N8rOutput> {
        if self.version {
            return Ok(N8rOutput::Version);
        }

        match &self.command {
            None => {
                let store = self.get_store()?;
                let logged_in =
                    matches!(store.load(), Ok(Some(credential)) if !credential.is_expired());
                Ok(N8rOutput::Welcome { logged_in })
            }
            Some(Command::Login(command)) => {
                let client = self.get_client_config()?.get_device_flow_client();
                command.run(&self.get_store()?, &client).await
            }
            Some(Command::Logout(command)) => command.run(&self.get_store()?),
            Some(Command::Status(command)) => command.run(&self.get_store()?),
            Some(Command::Profile(command)) => {
                let client = self.get_client_config()?.get_api_client();
                command.run(&self.get_store()?, &client).await
            }
            Some(Command::Version) => Ok(N8rOutput::Version),
        }
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;

    fn n8r(args: &[&str]) -> N8r {
        N8r::try_parse_from(std::iter::once("n8r").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn it_parses_the_short_version_flag() {
        assert!(n8r(&["-v"]).version);
        assert!(n8r(&["--version"]).version);
    }

    #[test]
    fn it_accepts_a_log_level_after_the_subcommand() {
        let app = n8r(&["status", "--log", "DEBUG"]);

        assert_that!(app.log_level).is_equal_to(Some(Level::DEBUG));
        assert!(matches!(app.command, Some(Command::Status(_))));
    }

    #[test]
    fn it_runs_the_welcome_screen_without_a_command() {
        assert!(n8r(&[]).command.is_none());
    }

    #[test]
    fn it_rejects_unknown_commands() {
        assert!(N8r::try_parse_from(["n8r", "deploy"]).is_err());
    }

    #[test]
    fn it_defaults_to_the_production_base_url() {
        let app = n8r(&[]);

        let base_url = app.get_base_url().unwrap();

        assert_that!(base_url.as_str()).is_equal_to("https://injectionator.com/");
    }

    #[test]
    fn it_reads_overrides_from_the_environment() {
        let mut app = n8r(&[]);
        app.env_store
            .insert(N8rEnvKey::BaseUrl, "http://localhost:3000");
        app.env_store.insert(N8rEnvKey::ConfigHome, "/tmp/n8r-test-home");

        assert_that!(app.get_base_url().unwrap().as_str()).is_equal_to("http://localhost:3000/");
        assert_that!(app.get_config().unwrap().home)
            .is_equal_to(Utf8PathBuf::from("/tmp/n8r-test-home"));
    }

    #[test]
    fn it_rejects_a_malformed_base_url() {
        let mut app = n8r(&[]);
        app.env_store.insert(N8rEnvKey::BaseUrl, "not a url");

        let error = app.get_base_url().unwrap_err();

        assert_that!(error.code()).is_equal_to(Some(crate::N8rErrorCode::E009));
    }
}
