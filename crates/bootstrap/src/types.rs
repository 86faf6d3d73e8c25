//! Shared value types for the bootstrap domain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::ConfigurationError;

// ---------------------------------------------------------------------------
// Log level
// ---------------------------------------------------------------------------

/// Severity threshold handed to the engine.
///
/// The set is closed. Builders and clients never interpret the value; it is
/// stored as given and passed to [`crate::Engine::run`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-request tracing.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal operational messages.
    #[default]
    Info,
    /// Recoverable problems.
    Warn,
    /// Failures.
    Error,
    /// Failures the engine cannot continue past.
    Critical,
    /// Logging disabled.
    Off,
}

impl LogLevel {
    /// All variants, most verbose first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Off,
    ];

    /// Returns the lowercase name used in settings files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Off => "off",
        }
    }

    /// Maps this level onto a `tracing` filter.
    ///
    /// `tracing` has no level above `ERROR`, so [`LogLevel::Critical`] maps to
    /// [`LevelFilter::ERROR`].
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownLogLevel {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn parses_exact_lowercase_names() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!("CRITICAL".parse::<LogLevel>().is_err());
        assert!(" off ".parse::<LogLevel>().is_err());
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownLogLevel {
                value: "verbose".into()
            }
        );
    }

    #[test]
    fn display_matches_serde_name() {
        for level in LogLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn critical_and_error_share_a_filter() {
        assert_eq!(LogLevel::Critical.as_level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Error.as_level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Off.as_level_filter(), LevelFilter::OFF);
    }
}
