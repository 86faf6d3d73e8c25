//! Bootstrap domain for the client.
//!
//! This crate holds every concept needed to describe how a client is
//! configured: the two mutually exclusive configuration sources, the
//! structured connection settings, the resolved configuration handed to an
//! engine, log levels, and the [`Engine`] port trait. Infrastructure crates
//! implement [`Engine`]; they never add configuration rules.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* an engine is given; the `engine` crate defines *how* it
//! is run.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`configuration`] | `ConfigurationSource`, `ConnectionSettings`, `ResolvedConfiguration`, `ClientConfiguration` |
//! | [`engine`] | The `Engine` port trait |
//! | [`settings`] | TOML settings file model |
//! | [`types`] | `LogLevel` |
//! | [`errors`] | `ConfigurationError`, `EngineError` |

pub mod configuration;
pub mod engine;
pub mod errors;
pub mod settings;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use configuration::{
    ClientConfiguration, ConfigurationSource, ConnectionSettings, ResolvedConfiguration,
    DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_DNS_REFRESH_SECONDS, DEFAULT_STATS_FLUSH_SECONDS,
};
pub use engine::Engine;
pub use errors::{ConfigurationError, EngineError};
pub use settings::ClientSettings;
pub use types::LogLevel;
