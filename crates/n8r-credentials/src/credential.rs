use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The credential issued by a completed device authorization.
///
/// It is always written as a whole: a new login replaces the previous
/// record rather than updating it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    /// Bearer token sent on authenticated API calls
    pub access_token: String,

    /// Token scheme reported by the authorization server, usually `Bearer`
    pub token_type: String,

    /// Absolute instant after which the token is no longer valid
    pub expires_at: DateTime<Utc>,

    /// When this record was written locally
    pub saved_at: DateTime<Utc>,
}

impl StoredCredential {
    /// Builds a credential from a token grant received at `now`, turning the
    /// server's relative lifetime into an absolute expiry.
    pub fn issued_at(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_at: now + expires_in,
            saved_at: now,
        }
    }

    /// Whether the token has expired as of `now`. A token is already
    /// expired at the exact instant of `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the token has expired according to the local wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// The access token with everything but its ends hidden, for display.
    pub fn masked_token(&self) -> String {
        let token = &self.access_token;
        let visible = 4;
        if token.chars().count() <= visible * 2 {
            return "*".repeat(token.chars().count());
        }
        let head: String = token.chars().take(visible).collect();
        let tail: String = token
            .chars()
            .skip(token.chars().count() - visible)
            .collect();
        format!("{head}{}{tail}", "*".repeat(8))
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("access_token", &self.masked_token())
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("saved_at", &self.saved_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    fn credential_expiring_at(expires_at: DateTime<Utc>) -> StoredCredential {
        StoredCredential {
            access_token: "access-token-value".to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
            saved_at: expires_at - Duration::hours(1),
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case::long_past(Duration::days(-30), true)]
    #[case::just_past(Duration::seconds(-1), true)]
    #[case::exact_boundary(Duration::zero(), true)]
    #[case::just_ahead(Duration::seconds(1), false)]
    #[case::far_ahead(Duration::days(30), false)]
    fn it_detects_expiry_relative_to_now(#[case] offset: Duration, #[case] expected: bool) {
        let credential = credential_expiring_at(noon() + offset);

        assert_that!(credential.is_expired_at(noon())).is_equal_to(expected);
    }

    #[test]
    fn it_computes_absolute_expiry_from_relative_lifetime() {
        let credential =
            StoredCredential::issued_at("token", "Bearer", Duration::seconds(3600), noon());

        assert_that!(credential.saved_at).is_equal_to(noon());
        assert_that!(credential.expires_at).is_equal_to(noon() + Duration::hours(1));
    }

    #[test]
    fn it_never_prints_the_raw_token() {
        let credential = credential_expiring_at(noon());

        let debug = format!("{credential:?}");

        assert!(!debug.contains("access-token-value"));
        assert_that!(credential.masked_token()).is_equal_to("acce********alue".to_string());
    }
}
