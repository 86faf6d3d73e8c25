//! The engine port.
//!
//! An [`Engine`] executes a client's networking on its behalf. This crate
//! only defines the capability; the production implementation lives in the
//! `engine` crate and test doubles live next to the client builder.

use crate::{ClientConfiguration, EngineError, LogLevel};

/// Capability implemented by every engine a client can be built on.
///
/// Engines are created through a zero-argument factory, once per client, and
/// are owned exclusively by that client.
pub trait Engine: std::fmt::Debug + Send + Sync {
    /// Stable name of the implementation, used in logs (e.g. `"native"`).
    fn name(&self) -> &str;

    /// Starts the engine with `configuration`, logging at `log_level`.
    ///
    /// # Errors
    ///
    /// Implementations return [`EngineError::AlreadyRunning`] when started
    /// twice and [`EngineError::Configuration`] when the configuration cannot
    /// be turned into a bootstrap document.
    fn run(&self, configuration: &ClientConfiguration, log_level: LogLevel)
        -> Result<(), EngineError>;
}
