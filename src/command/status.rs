use clap::Parser;
use n8r_credentials::CredentialStore;

use crate::command::output::StatusReport;
use crate::{N8rOutput, N8rResult};

#[derive(Debug, Parser)]
/// Show authentication status
pub struct Status {}

impl Status {
    pub fn run(&self, store: &dyn CredentialStore) -> N8rResult<N8rOutput> {
        let report = match store.load()? {
            None => StatusReport::NotAuthenticated,
            Some(credential) if credential.is_expired() => StatusReport::Expired {
                expires_at: credential.expires_at,
            },
            Some(credential) => StatusReport::Authenticated {
                token_type: credential.token_type,
                expires_at: credential.expires_at,
                saved_at: credential.saved_at,
            },
        };
        Ok(N8rOutput::Status(report))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use n8r_credentials::{MockCredentialStore, StoredCredential};
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_reports_not_authenticated_without_a_credential() {
        let mut store = MockCredentialStore::new();
        store.expect_load().returning(|| Ok(None));

        let output = Status {}.run(&store).unwrap();

        assert_that!(output).is_equal_to(N8rOutput::Status(StatusReport::NotAuthenticated));
    }

    #[rstest]
    #[case::valid(Duration::hours(1), false)]
    #[case::lapsed(Duration::hours(-1), true)]
    fn it_classifies_the_stored_credential(#[case] lifetime: Duration, #[case] expired: bool) {
        let saved_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mut credential = StoredCredential::issued_at(
            "access-abc".to_string(),
            "Bearer".to_string(),
            lifetime,
            Utc::now(),
        );
        credential.saved_at = saved_at;
        let expires_at = credential.expires_at;
        let mut store = MockCredentialStore::new();
        store
            .expect_load()
            .returning(move || Ok(Some(credential.clone())));

        let output = Status {}.run(&store).unwrap();

        let expected = if expired {
            StatusReport::Expired { expires_at }
        } else {
            StatusReport::Authenticated {
                token_type: "Bearer".to_string(),
                expires_at,
                saved_at,
            }
        };
        assert_that!(output).is_equal_to(N8rOutput::Status(expected));
    }
}
