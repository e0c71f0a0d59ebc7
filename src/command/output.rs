use std::io;

use calm_io::stdoutln;
use chrono::{DateTime, SecondsFormat, Utc};
use n8r_std::Style;

use crate::utils::client::ProfileResponse;
use crate::utils::DEFAULT_BASE_URL;
use crate::PKG_VERSION;

pub const BANNER: &str = r#"
 ███╗   ██╗ █████╗ ██████╗
 ████╗  ██║██╔══██╗██╔══██╗
 ██╔██╗ ██║╚█████╔╝██████╔╝
 ██║╚██╗██║██╔══██╗██╔══██╗
 ██║ ╚████║╚█████╔╝██║  ██║
 ╚═╝  ╚═══╝ ╚════╝ ╚═╝  ╚═╝
"#;

const USAGE: &str = "Commands:
  n8r login          Authenticate with Injectionator
  n8r logout         Remove stored credentials
  n8r status         Show authentication status
  n8r profile        View your Injectionator profile
  n8r version        Print version
";

/// N8rOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of n8r's commands should return `N8rResult<N8rOutput>`
/// and leave printing to `N8rOutput::print`.
#[derive(Clone, PartialEq, Debug)]
pub enum N8rOutput {
    Welcome { logged_in: bool },
    Version,
    AlreadyAuthenticated,
    LoginSuccess,
    LoggedOut,
    Status(StatusReport),
    Profile(Box<ProfileResponse>),
}

/// What `n8r status` found in the credential store.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StatusReport {
    NotAuthenticated,
    Expired {
        expires_at: DateTime<Utc>,
    },
    Authenticated {
        token_type: String,
        expires_at: DateTime<Utc>,
        saved_at: DateTime<Utc>,
    },
}

impl N8rOutput {
    pub fn get_stdout(&self) -> Option<String> {
        Some(match self {
            N8rOutput::Welcome { logged_in } => {
                let mut stdout = format!(
                    "{} Injectionator CLI v{}\n {}\n\n",
                    Style::Banner.paint(BANNER),
                    PKG_VERSION,
                    Style::Link.paint(DEFAULT_BASE_URL)
                );
                if *logged_in {
                    stdout.push_str(" You are logged in.\n\n");
                    stdout.push_str(USAGE);
                } else {
                    stdout.push_str(" You are not logged in.\n");
                    stdout.push_str(" This is an alpha product with limited access.\n");
                    stdout.push_str(&format!(
                        " Run {} to authenticate with your Injectionator account.\n",
                        Style::Command.paint("`n8r login`")
                    ));
                }
                stdout
            }
            N8rOutput::Version => format!("n8r v{}", PKG_VERSION),
            N8rOutput::AlreadyAuthenticated => format!(
                "You are already authenticated.\nRun {} first to re-authenticate.",
                Style::Command.paint("`n8r logout`")
            ),
            N8rOutput::LoginSuccess => Style::Success.paint("Successfully authenticated!"),
            N8rOutput::LoggedOut => "Logged out. Credentials removed.".to_string(),
            N8rOutput::Status(report) => report.to_string(),
            N8rOutput::Profile(profile) => format_profile(profile),
        })
    }

    pub fn print(&self) -> io::Result<()> {
        if let Some(stdout) = self.get_stdout() {
            stdoutln!("{}", stdout)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusReport::NotAuthenticated => write!(
                f,
                "Not authenticated. Run {} to get started.",
                Style::Command.paint("`n8r login`")
            ),
            StatusReport::Expired { expires_at } => {
                writeln!(f, "Status: {}", Style::Failure.paint("Token expired"))?;
                writeln!(f, "Expired at: {}", rfc3339(expires_at))?;
                write!(
                    f,
                    "Run {} to re-authenticate.",
                    Style::Command.paint("`n8r login`")
                )
            }
            StatusReport::Authenticated {
                token_type,
                expires_at,
                saved_at,
            } => {
                writeln!(f, "Status: {}", Style::Success.paint("Authenticated"))?;
                writeln!(f, "Token type: {}", token_type)?;
                writeln!(f, "Expires at: {}", rfc3339(expires_at))?;
                write!(f, "Saved at:   {}", rfc3339(saved_at))
            }
        }
    }
}

fn rfc3339(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn format_profile(profile: &ProfileResponse) -> String {
    let user = &profile.user;
    let mut lines = vec![
        Style::Banner.paint(BANNER),
        format!(" {}", Style::Heading.paint("Your Injectionator Profile")),
        " ──────────────────────────".to_string(),
        String::new(),
    ];

    let name = if user.name.is_empty() {
        "(not set)"
    } else {
        user.name.as_str()
    };
    lines.push(format!("  Name:         {}", name));
    lines.push(format!("  Email:        {}", user.email));
    if !user.role.is_empty() {
        lines.push(format!("  Role:         {}", user.role));
    }
    if !user.organization.is_empty() {
        lines.push(format!("  Organization: {}", user.organization));
    }
    if !user.interests.is_empty() {
        lines.push(format!("  Interests:    {}", user.interests.join(", ")));
    }
    lines.push(String::new());

    if !profile.cohorts.is_empty() {
        lines.push(format!("  Cohorts:      {}", profile.cohorts.join(", ")));
    }
    if profile.alpha_access {
        lines.push("  Alpha Access: Yes".to_string());
    }
    lines.push(String::new());

    lines.push(format!("  Points:       {}", profile.points));
    lines.push(format!(
        "  Missions:     {}/{} completed",
        profile.missions.completed, profile.missions.total
    ));

    if !profile.badges.is_empty() {
        lines.push(String::new());
        lines.push("  Badges:".to_string());
        for badge in &profile.badges {
            let emoji = if badge.emoji.is_empty() {
                " "
            } else {
                badge.emoji.as_str()
            };
            lines.push(format!("    {} {} ({})", emoji, badge.name, badge.mission));
        }
    }

    lines.join("\n")
}
