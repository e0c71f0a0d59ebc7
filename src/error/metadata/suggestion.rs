use std::fmt::{self, Display};

use n8r_std::Style;

use crate::utils::env::N8rEnvKey;

/// `N8rErrorSuggestion` contains possible suggestions for remedying specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum N8rErrorSuggestion {
    RunLogin,
    RerunLogin,
    RestartLogin,
    RequestAccess,
    LogoutAndLogin,
    CheckServerConnection,
    SetConfigHome,
    SetBaseUrl,
    SubmitIssue,
}

impl Display for N8rErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            N8rErrorSuggestion::RunLogin => {
                format!("Run {} to authenticate.", Style::Command.paint("`n8r login`"))
            }
            N8rErrorSuggestion::RerunLogin => {
                format!("Run {} to re-authenticate.", Style::Command.paint("`n8r login`"))
            }
            N8rErrorSuggestion::RestartLogin => format!(
                "The code is only valid for a limited time. Run {} again to get a new one.",
                Style::Command.paint("`n8r login`")
            ),
            N8rErrorSuggestion::RequestAccess => format!(
                "n8r is an alpha product with limited access. If you meant to approve the request, run {} again.",
                Style::Command.paint("`n8r login`")
            ),
            N8rErrorSuggestion::LogoutAndLogin => format!(
                "Run {} to remove the unreadable credential, then {}.",
                Style::Command.paint("`n8r logout`"),
                Style::Command.paint("`n8r login`")
            ),
            N8rErrorSuggestion::CheckServerConnection => format!(
                "Check your network connection. If you set {}, make sure it points at a reachable Injectionator server.",
                Style::Command.paint(format!("${}", N8rEnvKey::BaseUrl))
            ),
            N8rErrorSuggestion::SetConfigHome => format!(
                "Set {} to a writable directory to store your credentials elsewhere.",
                Style::Command.paint(format!("${}", N8rEnvKey::ConfigHome))
            ),
            N8rErrorSuggestion::SetBaseUrl => format!(
                "Set {} to a full URL such as {}.",
                Style::Command.paint(format!("${}", N8rEnvKey::BaseUrl)),
                Style::Link.paint(crate::utils::DEFAULT_BASE_URL)
            ),
            N8rErrorSuggestion::SubmitIssue => format!(
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do: {}",
                Style::Link.paint("https://github.com/injectionator/n8r/issues/new")
            ),
        };
        write!(formatter, "{}", &suggestion)
    }
}
