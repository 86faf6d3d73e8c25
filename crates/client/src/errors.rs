//! Errors surfaced by the client facade.

use bootstrap::{ConfigurationError, EngineError};
use thiserror::Error;

/// Errors returned by [`crate::ClientBuilder`] and [`crate::Client`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The engine factory failed to produce an engine during `build()`.
    ///
    /// No client is returned. The builder does not retry and does not fall
    /// back to another factory.
    #[error("Engine construction failed: {source}")]
    EngineConstruction {
        /// The error reported by the factory.
        #[source]
        source: EngineError,
    },

    /// The engine failed after construction (e.g. when the client is started).
    #[error("Engine failed: {0}")]
    Engine(#[source] EngineError),

    /// Settings could not be turned into a builder.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
