//! Error types for the bootstrap domain.
//!
//! [`ConfigurationError`] covers problems with the configuration a client is
//! assembled from: settings files, log-level names, and bootstrap templates.
//!
//! [`EngineError`] is produced by [`crate::Engine`] implementations, both when
//! they are constructed and when they are asked to run. Callers one layer up
//! (the client builder) wrap it rather than inspecting it.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors raised while interpreting client configuration.
///
/// Numeric connection settings never produce an error here: every unsigned
/// value, including zero, is passed through to the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A log-level name did not match any [`crate::LogLevel`] variant.
    #[error("Unknown log level '{value}'")]
    UnknownLogLevel {
        /// The rejected name, as supplied.
        value: String,
    },

    /// A bootstrap template still contained a placeholder after substitution.
    #[error("Unresolved template placeholder: {placeholder}")]
    UnresolvedTemplate {
        /// The first placeholder left in the rendered document, braces included.
        placeholder: String,
    },

    /// A settings file named neither a domain nor a YAML document.
    #[error("Settings must provide either `domain` or `yaml`")]
    MissingSource,

    /// A settings file named both a domain and a YAML document.
    ///
    /// The two sources are mutually exclusive; neither is preferred silently.
    #[error("Settings must not provide both `domain` and `yaml`")]
    ConflictingSources,

    /// A settings document could not be parsed.
    #[error("Settings could not be parsed: {message}")]
    Parse {
        /// Parser diagnostic, including the location when available.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// Errors produced by an engine implementation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be created or is not in a usable state.
    #[error("Engine unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of why the engine cannot be used.
        reason: String,
    },

    /// `run` was called on an engine instance that is already running.
    #[error("Engine is already running")]
    AlreadyRunning,

    /// The configuration handed to the engine could not be rendered.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl EngineError {
    /// Convenience constructor for [`EngineError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
