//! The immutable client produced by [`ClientBuilder`](crate::ClientBuilder).

use bootstrap::{ClientConfiguration, Engine, LogLevel, ResolvedConfiguration};
use tracing::info;

use crate::{ClientError, ClientId};

/// A configured client.
///
/// Owns its engine exclusively. Nothing about a client can change after
/// construction; building again yields a separate client with a separate
/// engine.
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    configuration: ClientConfiguration,
    log_level: LogLevel,
    engine: Box<dyn Engine>,
}

impl Client {
    /// Creates a client from a raw configuration document.
    pub fn from_yaml(
        yaml: impl Into<String>,
        log_level: LogLevel,
        engine: Box<dyn Engine>,
    ) -> Self {
        Self::with_configuration(ClientConfiguration::Yaml(yaml.into()), log_level, engine)
    }

    /// Creates a client from a resolved structured configuration.
    pub fn from_configuration(
        configuration: ResolvedConfiguration,
        log_level: LogLevel,
        engine: Box<dyn Engine>,
    ) -> Self {
        Self::with_configuration(
            ClientConfiguration::Resolved(configuration),
            log_level,
            engine,
        )
    }

    fn with_configuration(
        configuration: ClientConfiguration,
        log_level: LogLevel,
        engine: Box<dyn Engine>,
    ) -> Self {
        Self {
            id: ClientId::new_random(),
            configuration,
            log_level,
            engine,
        }
    }

    /// Returns the identifier assigned when this client was built.
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the configuration the engine is started with.
    pub fn configuration(&self) -> &ClientConfiguration {
        &self.configuration
    }

    /// Returns the log level handed to the engine.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the engine this client owns.
    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    /// Starts the engine with this client's configuration and log level.
    ///
    /// Building a client never starts it; this is the only place the engine
    /// is asked to run.
    ///
    /// # Errors
    ///
    /// [`ClientError::Engine`] with whatever the engine reported.
    pub fn start(&self) -> Result<(), ClientError> {
        self.engine
            .run(&self.configuration, self.log_level)
            .map_err(ClientError::Engine)?;
        info!(client_id = %self.id, engine = self.engine.name(), "Client started");
        Ok(())
    }
}
