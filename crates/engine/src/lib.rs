//! Production engine adapter.
//!
//! Implements the [`bootstrap::Engine`] trait. A [`NativeEngine`] turns a
//! client configuration into the bootstrap document the network stack is
//! started with and tracks whether it has been started.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Bootstrap rendering and engine lifecycle live here.
//! The `client` crate sees only [`bootstrap::Engine`] and constructs this type
//! through its default engine factory.

mod template;

use std::sync::OnceLock;

use bootstrap::{ClientConfiguration, Engine, EngineError, LogLevel};
use tracing::{debug, info};

pub use template::DEFAULT_TEMPLATE;

/// The engine used by clients unless a test substitutes another.
#[derive(Debug, Default)]
pub struct NativeEngine {
    bootstrap: OnceLock<String>,
}

impl NativeEngine {
    /// Name reported through [`Engine::name`].
    pub const NAME: &'static str = "native";

    /// Creates an engine that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once [`Engine::run`] has succeeded.
    pub fn is_running(&self) -> bool {
        self.bootstrap.get().is_some()
    }

    /// The bootstrap document the engine was started with, if it is running.
    pub fn bootstrap_document(&self) -> Option<&str> {
        self.bootstrap.get().map(String::as_str)
    }
}

impl Engine for NativeEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(
        &self,
        configuration: &ClientConfiguration,
        log_level: LogLevel,
    ) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }

        let document = configuration.bootstrap_document(DEFAULT_TEMPLATE)?;
        debug!(bytes = document.len(), "Rendered bootstrap document");

        self.bootstrap
            .set(document.into_owned())
            .map_err(|_| EngineError::AlreadyRunning)?;

        info!(
            engine = Self::NAME,
            log_level = %log_level,
            domain = configuration.as_resolved().map(|c| c.domain()),
            "Engine started"
        );
        Ok(())
    }
}
