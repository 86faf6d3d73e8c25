//! Settings file model.
//!
//! A settings file is a small TOML document describing one client:
//!
//! ```toml
//! domain = "api.foo.com"
//! log_level = "debug"
//! connect_timeout_seconds = 10
//! ```
//!
//! Exactly one of `domain` or `yaml` must be present. Omitted numeric fields
//! take the same defaults as the builder.

use serde::{Deserialize, Serialize};

use crate::{
    ConfigurationError, ConfigurationSource, ConnectionSettings, LogLevel,
    DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_DNS_REFRESH_SECONDS, DEFAULT_STATS_FLUSH_SECONDS,
};

/// Deserialised contents of a client settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSettings {
    /// Domain to connect to. Mutually exclusive with `yaml`.
    #[serde(default)]
    pub domain: Option<String>,

    /// Full configuration document. Mutually exclusive with `domain`.
    ///
    /// When set, the numeric fields below are carried but have no effect on
    /// the built client.
    #[serde(default)]
    pub yaml: Option<String>,

    /// Log level handed to the engine. Defaults to `info`.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Timeout for new network connections, in seconds.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u32,

    /// DNS refresh rate, in seconds.
    #[serde(default = "default_dns_refresh_seconds")]
    pub dns_refresh_seconds: u32,

    /// Stats flush interval, in seconds.
    #[serde(default = "default_stats_flush_seconds")]
    pub stats_flush_seconds: u32,
}

fn default_connect_timeout_seconds() -> u32 {
    DEFAULT_CONNECT_TIMEOUT_SECONDS
}

fn default_dns_refresh_seconds() -> u32 {
    DEFAULT_DNS_REFRESH_SECONDS
}

fn default_stats_flush_seconds() -> u32 {
    DEFAULT_STATS_FLUSH_SECONDS
}

impl ClientSettings {
    /// Parses a TOML settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] for malformed TOML, unknown keys,
    /// or values of the wrong type (including unknown log-level names).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(text).map_err(|e| ConfigurationError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the single configuration source these settings describe.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingSource`] if neither `domain` nor `yaml` is
    /// set, [`ConfigurationError::ConflictingSources`] if both are.
    pub fn source(&self) -> Result<ConfigurationSource, ConfigurationError> {
        match (&self.domain, &self.yaml) {
            (Some(domain), None) => Ok(ConfigurationSource::Domain(domain.clone())),
            (None, Some(yaml)) => Ok(ConfigurationSource::Yaml(yaml.clone())),
            (None, None) => Err(ConfigurationError::MissingSource),
            (Some(_), Some(_)) => Err(ConfigurationError::ConflictingSources),
        }
    }

    /// Returns the structured connection settings.
    pub fn connection(&self) -> ConnectionSettings {
        ConnectionSettings {
            connect_timeout_seconds: self.connect_timeout_seconds,
            dns_refresh_seconds: self.dns_refresh_seconds,
            stats_flush_seconds: self.stats_flush_seconds,
        }
    }
}
