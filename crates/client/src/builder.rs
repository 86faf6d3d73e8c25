//! Fluent builder for [`Client`].
//!
//! A builder starts from one configuration source, chosen by its constructor,
//! and accumulates the remaining settings through chained calls:
//!
//! ```
//! use client::{ClientBuilder, LogLevel};
//!
//! let client = ClientBuilder::with_domain("api.foo.com")
//!     .connect_timeout_seconds(10)
//!     .log_level(LogLevel::Debug)
//!     .build()
//!     .unwrap();
//! assert_eq!(client.log_level(), LogLevel::Debug);
//! ```
//!
//! `build()` borrows the builder, so the same builder can produce any number
//! of independent clients.

use bootstrap::{
    ClientConfiguration, ClientSettings, ConfigurationSource, ConnectionSettings, LogLevel,
};
use tracing::{debug, warn};

use crate::{Client, ClientError, EngineFactory};

/// Builder used for creating new instances of [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    source: ConfigurationSource,
    log_level: LogLevel,
    connection: ConnectionSettings,
    engine_factory: EngineFactory,
}

impl ClientBuilder {
    /// Starts a builder for `domain` (e.g. `api.foo.com`).
    ///
    /// The domain should be non-empty. It is not validated here; the engine
    /// decides what a usable domain is.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self::from_source(ConfigurationSource::Domain(domain.into()))
    }

    /// Starts a builder from a complete YAML configuration.
    ///
    /// Connection settings applied to this builder afterwards have no effect
    /// on the built client.
    pub fn with_yaml(yaml: impl Into<String>) -> Self {
        Self::from_source(ConfigurationSource::Yaml(yaml.into()))
    }

    fn from_source(source: ConfigurationSource) -> Self {
        Self {
            source,
            log_level: LogLevel::default(),
            connection: ConnectionSettings::default(),
            engine_factory: EngineFactory::default(),
        }
    }

    /// Starts a builder with every field taken from `settings`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Configuration`] if `settings` does not name exactly one
    /// source.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let connection = settings.connection();
        Ok(Self::from_source(settings.source()?)
            .log_level(settings.log_level)
            .connect_timeout_seconds(connection.connect_timeout_seconds)
            .dns_refresh_seconds(connection.dns_refresh_seconds)
            .stats_flush_seconds(connection.stats_flush_seconds))
    }

    /// Log level handed to the engine.
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Timeout for new network connections to hosts in the cluster.
    pub fn connect_timeout_seconds(mut self, seconds: u32) -> Self {
        self.connection.connect_timeout_seconds = seconds;
        self
    }

    /// Rate at which DNS is refreshed.
    pub fn dns_refresh_seconds(mut self, seconds: u32) -> Self {
        self.connection.dns_refresh_seconds = seconds;
        self
    }

    /// Interval at which stats are flushed.
    pub fn stats_flush_seconds(mut self, seconds: u32) -> Self {
        self.connection.stats_flush_seconds = seconds;
        self
    }

    /// Replaces the engine factory used by subsequent `build()` calls.
    ///
    /// Clients already built keep the engine they were built with.
    #[cfg(any(test, feature = "test-util"))]
    pub fn engine_factory(mut self, factory: EngineFactory) -> Self {
        self.engine_factory = factory;
        self
    }

    /// Returns the configuration source chosen at construction.
    pub fn source(&self) -> &ConfigurationSource {
        &self.source
    }

    /// Returns the connection settings accumulated so far.
    pub fn connection_settings(&self) -> &ConnectionSettings {
        &self.connection
    }

    /// Returns the log level accumulated so far.
    pub fn current_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Builds a new client from the accumulated configuration.
    ///
    /// Creates a fresh engine through the factory slot, then resolves the
    /// source: a YAML source is handed over untouched, a domain source is
    /// combined with the connection settings.
    ///
    /// # Errors
    ///
    /// [`ClientError::EngineConstruction`] if the factory fails. No client is
    /// produced in that case.
    pub fn build(&self) -> Result<Client, ClientError> {
        let engine = self.engine_factory.create().map_err(|source| {
            warn!(error = %source, "Engine construction failed");
            ClientError::EngineConstruction { source }
        })?;

        let client = match self.source.resolve(&self.connection) {
            ClientConfiguration::Yaml(yaml) => Client::from_yaml(yaml, self.log_level, engine),
            ClientConfiguration::Resolved(config) => {
                Client::from_configuration(config, self.log_level, engine)
            }
        };

        debug!(
            client_id = %client.id(),
            engine = client.engine().name(),
            source = self.source.kind(),
            log_level = %self.log_level,
            "Built client"
        );
        Ok(client)
    }
}
