#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by n8r and the libraries it depends on.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Environment variable holding a filter directive, e.g. `n8r_oauth=trace`.
pub const LOG_ENV_VAR: &str = "N8R_LOG";

/// Initializes a global tracing subscriber that writes to stderr.
///
/// An explicit `level` wins over `N8R_LOG`. With neither, no subscriber is
/// installed and nothing is printed.
pub fn init(level: Option<Level>) {
    let Some(filter) = filter_for(level, std::env::var(LOG_ENV_VAR).ok()) else {
        return;
    };
    let format = fmt::format().without_time().with_target(false).compact();
    fmt()
        .with_env_filter(filter)
        .event_format(format)
        .with_writer(io::stderr)
        .init();
}

fn filter_for(level: Option<Level>, directive: Option<String>) -> Option<EnvFilter> {
    match (level, directive) {
        (Some(level), _) => Some(EnvFilter::new(level.as_str().to_lowercase())),
        (None, Some(directive)) if !directive.trim().is_empty() => {
            Some(EnvFilter::new(directive))
        }
        (None, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use tracing_core::metadata::ParseLevelError;

    use super::{filter_for, Level, LEVELS};
    use std::str::FromStr;

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }

    #[test]
    fn it_stays_silent_without_a_level_or_directive() {
        assert!(filter_for(None, None).is_none());
        assert!(filter_for(None, Some("  ".to_string())).is_none());
    }

    #[test]
    fn it_prefers_the_explicit_level() {
        let filter = filter_for(Some(Level::DEBUG), Some("error".to_string())).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "debug");
    }

    #[test]
    fn it_falls_back_to_the_env_directive() {
        let filter = filter_for(None, Some("n8r_oauth=trace".to_string())).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "n8r_oauth=trace");
    }
}
